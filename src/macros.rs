//! Emission macros.
//!
//! ```ignore
//! logshim::info!("connected");
//! logshim::warn!("slow peer", "topic" => "tunnel", "rtt_ms" => 420);
//! logshim::error!(logger: bound, "dropped", "reason" => "eof");
//! logshim::debug!(ctx: &ctx, "retrying");
//! ```
//!
//! Unlike the plain functions, the macros record the enclosing function name
//! and skip building attributes when the level is filtered out.

/// Fully qualified path of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Call-site [`Source`](crate::Source) of the macro invocation.
#[macro_export]
macro_rules! source {
    () => {
        $crate::Source::new(::std::file!(), ::std::line!(), $crate::function_name!())
    };
}

/// Build a `Vec<Attr>` from `"key" => value` pairs.
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {
        ::std::vec![$($crate::Attr::new($key, $value)),*]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    (
        $level:expr; logger: $logger:expr, ctx: $ctx:expr,
        $msg:expr $(, $key:expr => $value:expr)* $(,)?
    ) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            let attrs: ::std::vec::Vec<$crate::Attr> = $crate::attrs![$($key => $value),*];
            logger.emit(
                $ctx,
                level,
                ::std::convert::AsRef::<str>::as_ref(&$msg),
                &attrs,
                ::std::option::Option::Some($crate::source!()),
            );
        }
    }};
    ($level:expr; logger: $logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__emit!(
            $level;
            logger: $logger,
            ctx: &$crate::Context::background(),
            $msg $(, $key => $value)*
        )
    };
    ($level:expr; ctx: $ctx:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__emit!($level; logger: $crate::current(), ctx: $ctx, $msg $(, $key => $value)*)
    };
    ($level:expr; $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__emit!(
            $level;
            logger: $crate::current(),
            ctx: &$crate::Context::background(),
            $msg $(, $key => $value)*
        )
    };
}

/// Emit at a runtime-chosen level.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::__emit!($level; $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Debug; $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Info; $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Warn; $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Error; $($arg)+)
    };
}
