//! Runtime-checked filter-map over dynamic values.

use crate::function::Function;
use crate::value::Value;
use alloc::vec::Vec;
use siftmap_core::{declared, AdvisorySink, Error, FilterMap, Result, TracingSink, Visit};

/// Filters and maps `source` in one pass with dynamically-typed callables.
///
/// Both `predicate` and `transform` must be `Value::Function`, otherwise
/// `InvalidArgument` is returned before any element is visited, with the
/// message `"<value> is not a function"`. The predicate is checked first.
/// When `context` is given, it is the receiver both functions see through
/// `Visit::context`.
///
/// Each function's declared parameter count drives the positional-access
/// advisory, which goes to `tracing`. Errors raised by either body abort the
/// pass and are returned unchanged.
pub fn filter_map(
    source: &mut [Value],
    predicate: &Value,
    transform: &Value,
    context: Option<&Value>,
) -> Result<Vec<Value>> {
    filter_map_in(&mut TracingSink, source, predicate, transform, context)
}

/// Same as [`filter_map`], sending the advisory to `sink`.
pub fn filter_map_in<S>(
    sink: &mut S,
    source: &mut [Value],
    predicate: &Value,
    transform: &Value,
    context: Option<&Value>,
) -> Result<Vec<Value>>
where
    S: AdvisorySink + ?Sized,
{
    let predicate = callable(predicate)?;
    let transform = callable(transform)?;

    FilterMap::new().maybe_context(context).sink(sink).try_run(
        source,
        declared(predicate.params(), |v: &mut Visit<'_, Value, Value>| {
            predicate.call(v)
        }),
        declared(transform.params(), |v: &mut Visit<'_, Value, Value>| {
            transform.call(v)
        }),
    )
}

fn callable(value: &Value) -> Result<&Function> {
    match value.as_function() {
        Some(f) => Ok(f),
        None => {
            let err = Error::not_a_function(value);
            tracing::debug!(error = %err, "rejected filter-map callback");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use siftmap_core::Advisory;

    fn always(result: bool) -> Value {
        Function::anonymous(0, move |_| Ok(Value::Bool(result))).into()
    }

    #[test]
    fn test_rejects_non_callable_predicate_first() {
        let mut source = vec![Value::from(1)];
        let err = filter_map(
            &mut source,
            &Value::from("Dude, this"),
            &Value::from(7),
            None,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Dude, this is not a function");
    }

    #[test]
    fn test_rejects_before_visiting() {
        let mut sink: Vec<Advisory> = Vec::new();
        let mut source = vec![Value::from(1), Value::from(2)];
        let visiting = Function::anonymous(3, |v| {
            v.element_mut().set("seen", Value::Bool(true));
            Ok(Value::Bool(true))
        });
        let err = filter_map_in(
            &mut sink,
            &mut source,
            &visiting.into(),
            &Value::Null,
            None,
        )
        .unwrap_err();
        assert_eq!(err.message(), "null is not a function");
        assert!(sink.is_empty());
        assert_eq!(source, [Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_truthy_values_keep_elements() {
        let mut source = vec![Value::from(0), Value::from(""), Value::from("x"), Value::from(3)];
        let pick = Function::anonymous(1, |v| Ok(v.element().clone()));
        let out = filter_map(&mut source, &pick.clone().into(), &pick.into(), None).unwrap();
        assert_eq!(out, [Value::from("x"), Value::from(3)]);
    }

    #[test]
    fn test_body_error_aborts() {
        let mut source = vec![Value::from(1), Value::from(2)];
        let fail = Function::anonymous(1, |v| {
            if v.index() == 1 {
                Err(Error::thrown("no second"))
            } else {
                Ok(v.element().clone())
            }
        });
        let err = filter_map(&mut source, &always(true), &fail.into(), None).unwrap_err();
        assert_eq!(err, Error::thrown("no second"));
    }

    #[test]
    fn test_reject_all() {
        let mut source = vec![Value::from(1), Value::from(2)];
        let id = Function::anonymous(1, |v| Ok(v.element().clone()));
        let out = filter_map(&mut source, &always(false), &id.into(), None).unwrap();
        assert!(out.is_empty());
    }
}
