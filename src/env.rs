/// Declare a constant holding the name of an environment variable.
#[macro_export]
macro_rules! env_var {
    ($name:ident) => {
        const $name: &'static str = stringify!($name);
    };
}

/// Read `$name` through the `$vars` lookup and parse it as `$type_raw`.
///
/// Evaluates to `None` when the variable is unset or blank, bails out of the
/// enclosing function when it cannot be parsed.
#[macro_export]
macro_rules! env_parse {
    ($vars:expr, $name:ident, $type_raw:ty) => {
        match ($vars)($name).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<$type_raw>().with_context(
                || {
                    format!(
                        "{} env var cannot be parsed in the correct type",
                        $name
                    )
                },
            )?),
            None => None,
        }
    };
}

/// Same as [env_parse] but the value then goes through the validating
/// constructor of `$type`.
#[macro_export]
macro_rules! env_load {
    ($vars:expr, $type:ident, $name:ident, $type_raw:ty) => {
        match $crate::env_parse!($vars, $name, $type_raw) {
            Some(raw) => Some(
                $type::try_new(raw)
                    .with_context(|| format!("{} was not formatted right", $name))?,
            ),
            None => None,
        }
    };
}
