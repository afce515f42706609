/// A `Future` that is `Send`.
macro_rules! future_send {
    ($t:ty) => {
        impl ::core::future::Future<Output = $t> + Send
    };
}

/// Build the argument map of an invocation.
///
/// Each value is converted with [`IntoProtobufValue`](crate::conv::IntoProtobufValue).
macro_rules! args {
    ($($key:literal => $value:expr),* $(,)?) => {
        ::prost_types::Struct {
            fields: [$((
                ::std::string::String::from($key),
                $crate::conv::IntoProtobufValue::into_protobuf_value($value),
            )),*]
            .into_iter()
            .collect(),
        }
    };
}

pub(crate) use {args, future_send};
