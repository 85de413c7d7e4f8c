//! # Integration Test Flows
//!
//! Exercises the `Optional` container the way calling code uses it:
//! chained combinators, lazy fallbacks, caller-supplied errors, and the
//! identity equality/digest policy for `Shared` handles, all through the
//! public API only.

#[cfg(test)]
mod tests {
    use optional::{DebugHash, Optional, OptionalError, Shared};
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error)]
    enum LookupError {
        #[error("user {0} not found")]
        UserNotFound(u32),
    }

    #[derive(Debug)]
    struct User {
        id: u32,
        name: String,
    }

    fn find_user(id: u32) -> Optional<Shared<User>> {
        match id {
            1 => Optional::of(Shared::new(User {
                id: 1,
                name: "alice".into(),
            })),
            _ => Optional::empty(),
        }
    }

    #[test]
    fn test_map_chain_uppercases_present_value() {
        let result = Optional::of("value").map(|v| Some(v.to_uppercase()));

        assert_eq!(result.get(), Ok("VALUE".to_string()));
    }

    #[test]
    fn test_empty_chain_falls_back_lazily() {
        let result = Optional::<String>::empty()
            .map(|v| Some(v.to_uppercase()))
            .or_else_get(|| "default".to_string());

        assert_eq!(result, "default");
    }

    #[test]
    fn test_flat_map_chain_threads_optionals() {
        let result = Optional::of("value")
            .flat_map(|v| Optional::of(v.to_uppercase()))
            .flat_map(|v| Optional::of(format!("<{v}>")));

        assert_eq!(result.get(), Ok("<VALUE>".to_string()));

        let short_circuited = Optional::of("value")
            .flat_map(|_| Optional::<String>::empty())
            .flat_map(|v| Optional::of(format!("<{v}>")));

        assert!(!short_circuited.is_present());
    }

    #[test]
    fn test_lookup_flow_surfaces_caller_error_when_absent() {
        let missing = 9;

        let result = find_user(missing)
            .map(|user| Some(user.name.clone()))
            .or_else_throw(|| LookupError::UserNotFound(missing));

        assert_eq!(result, Err(LookupError::UserNotFound(9)));

        let result = find_user(1)
            .map(|user| Some(user.name.clone()))
            .or_else_throw(|| LookupError::UserNotFound(1));

        assert_eq!(result, Ok("alice".to_string()));
    }

    #[test]
    fn test_nullable_boundary_flow() {
        // External data arrives as std Option; absence crosses the
        // boundary as Empty, presence as Present.
        let rows: Vec<Option<u32>> = vec![Some(10), None, Some(30)];

        let totals: Vec<u32> = rows
            .into_iter()
            .map(|row| Optional::of_nullable(row).or_else(0))
            .collect();

        assert_eq!(totals, vec![10, 0, 30]);
    }

    #[test]
    fn test_required_boundary_rejects_absent_row() {
        let result = Optional::<u32>::of_required(None);

        assert!(matches!(result, Err(OptionalError::InvalidArgument(_))));
    }

    #[test]
    fn test_shared_identity_flow() {
        let user = find_user(1);
        let same = user.clone();

        assert_eq!(user, same, "Clones denote the same instance");
        assert_ne!(
            find_user(1),
            find_user(1),
            "Separate lookups allocate distinct instances"
        );
    }

    #[test]
    fn test_hash_code_flow() {
        assert_eq!(
            Optional::<u64>::empty().hash_code(),
            Optional::<u64>::empty().hash_code(),
            "Empty digest is a fixed constant"
        );

        let user = find_user(1);
        assert_eq!(user.hash_code(), user.clone().hash_code());
        assert_ne!(
            find_user(1).hash_code(),
            find_user(1).hash_code(),
            "Field-equal instances digest differently"
        );

        let lookup = find_user(1);
        lookup.if_present(|user| {
            assert_eq!(user.id, 1);
            assert_eq!(user.debug_hash(), user.debug_hash());
        });
    }
}
