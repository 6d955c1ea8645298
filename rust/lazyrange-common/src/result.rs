pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with a configuration error unless `$expr` holds.
///
/// The error carries the stringified condition, e.g. `step != 0`.
#[macro_export]
macro_rules! verify_config {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_config(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_config(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_config(name, condition)
    }
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_config(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::Configuration {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Result};

    fn checked_step(step: i64) -> Result<i64> {
        verify_config!(step, step != 0);
        Ok(step)
    }

    fn checked_rank(rank: i64) -> Result<i64> {
        verify_arg!(rank, rank >= 0);
        Ok(rank)
    }

    #[test]
    fn test_verify_config() {
        assert_eq!(checked_step(3).unwrap(), 3);
        let err = checked_step(0).unwrap_err();
        match err.kind() {
            ErrorKind::Configuration { name, message } => {
                assert_eq!(name, "step");
                assert_eq!(message, "step != 0");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(checked_rank(0).unwrap(), 0);
        assert!(!checked_rank(-1).unwrap_err().is_configuration());
    }
}
