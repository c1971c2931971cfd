//! Call-site macros that capture location and route through the global
//! registry.

/// Logs one record through the global registry.
///
/// Captures module path, file, and line at the call site, builds the
/// [`Metadata`](crate::Metadata) bundle, and substitutes the format
/// arguments exactly once.
///
/// ```
/// use loghub::{Severity, log};
///
/// log!(Severity::Info, "net", "connected in {} ms", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $tag:expr, $($arg:tt)+) => {{
        let metadata = $crate::Metadata::new($severity)
            .with_tag($tag)
            .with_call_site($crate::CallSite::new(module_path!(), file!(), line!()));
        $crate::registry::global().log(&metadata, format_args!($($arg)+));
    }};
}

/// Like [`log!`], gated by a [`Conditional`](crate::Conditional) evaluated
/// before anything else, so gate side effects happen even when every sink
/// rejects the record.
///
/// The condition is anything `Into<Conditional>`: a `bool`, or a
/// `Conditional` value. A gate held across calls is passed as
/// `gate.clone()`; clones share their sampling state.
///
/// ```
/// use loghub::{Conditional, Severity, clog};
///
/// let every_third = Conditional::every(3);
/// for attempt in 0..9 {
///     clog!(Severity::Warning, "net", every_third.clone(), "retry {}", attempt);
/// }
/// ```
#[macro_export]
macro_rules! clog {
    ($severity:expr, $tag:expr, $condition:expr, $($arg:tt)+) => {{
        let metadata = $crate::Metadata::new($severity)
            .with_tag($tag)
            .with_call_site($crate::CallSite::new(module_path!(), file!(), line!()));
        $crate::registry::global().log_if(
            &$crate::Conditional::from($condition),
            &metadata,
            format_args!($($arg)+),
        );
    }};
}
