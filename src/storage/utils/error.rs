/// Wrap the error of a storage call into a context-carrying variant.
///
/// The variant must have a `source: Box<Error>` field; the remaining fields are
/// given inline, e.g. `wrap_err!(call.await, ListDirectoryFailed { path: p })`.
#[macro_export]
macro_rules! wrap_err {
    ($result:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {
        $result.map_err(|err| $crate::error::Error::$variant {
            $($field: $value,)*
            source: Box::new(err),
        })
    };
}
