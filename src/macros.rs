/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __type_name_of(__here);
        let path = path.strip_suffix("::__here").unwrap_or(path);
        let mut path = path;
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        match path.rfind("::") {
            Some(pos) => &path[pos + 2..],
            None => path,
        }
    }};
}

/// [`CallSite`](crate::record::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::record::CallSite::new(::std::file!(), ::std::line!(), $crate::function_name!())
    };
}

// A leading literal is always a format string, so inline captures such as
// `"peer {peer}"` are interpolated and braces need `{{ }}`. Any other single
// expression is rendered through its `Display`.
#[doc(hidden)]
#[macro_export]
macro_rules! __glyph_log {
    ($method:ident, tag: $tag:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::facade::$method(
            $crate::call_site!(),
            ::std::option::Option::Some(&$tag as &dyn ::std::fmt::Display),
            &::std::format_args!($fmt, $($arg)+),
        )
    };
    ($method:ident, tag: $tag:expr, $fmt:literal $(,)?) => {
        $crate::facade::$method(
            $crate::call_site!(),
            ::std::option::Option::Some(&$tag as &dyn ::std::fmt::Display),
            &::std::format_args!($fmt),
        )
    };
    ($method:ident, tag: $tag:expr, $msg:expr $(,)?) => {
        $crate::facade::$method(
            $crate::call_site!(),
            ::std::option::Option::Some(&$tag as &dyn ::std::fmt::Display),
            &$msg,
        )
    };
    ($method:ident, $fmt:literal, $($arg:tt)+) => {
        $crate::facade::$method(
            $crate::call_site!(),
            ::std::option::Option::None,
            &::std::format_args!($fmt, $($arg)+),
        )
    };
    ($method:ident, $fmt:literal $(,)?) => {
        $crate::facade::$method(
            $crate::call_site!(),
            ::std::option::Option::None,
            &::std::format_args!($fmt),
        )
    };
    ($method:ident, $msg:expr $(,)?) => {
        $crate::facade::$method($crate::call_site!(), ::std::option::Option::None, &$msg)
    };
}

/// Log at `fault` severity through the process-wide facade, then abort.
///
/// ```no_run
/// glyph_log::fault!(tag: "storage", "journal corrupted at offset {}", 4096);
/// ```
#[macro_export]
macro_rules! fault {
    ($($args:tt)+) => {
        $crate::__glyph_log!(fault, $($args)+)
    };
}

/// Log at `error` severity through the process-wide facade.
///
/// ```
/// glyph_log::error!("request failed");
/// glyph_log::error!(tag: "http", "status {}", 503);
/// ```
#[macro_export]
macro_rules! error {
    ($($args:tt)+) => {
        $crate::__glyph_log!(error, $($args)+)
    };
}

/// Log at `warning` severity through the process-wide facade.
#[macro_export]
macro_rules! warning {
    ($($args:tt)+) => {
        $crate::__glyph_log!(warning, $($args)+)
    };
}

/// Log at `info` severity through the process-wide facade.
///
/// ```
/// let peer = 7;
/// glyph_log::info!("peer {peer} connected");
/// glyph_log::info!(tag: "net", peer);
/// ```
#[macro_export]
macro_rules! info {
    ($($args:tt)+) => {
        $crate::__glyph_log!(info, $($args)+)
    };
}

/// Log at `debug` severity through the process-wide facade.
#[macro_export]
macro_rules! debug {
    ($($args:tt)+) => {
        $crate::__glyph_log!(debug, $($args)+)
    };
}

/// Log at `verbose` severity through the process-wide facade.
#[macro_export]
macro_rules! verbose {
    ($($args:tt)+) => {
        $crate::__glyph_log!(verbose, $($args)+)
    };
}
