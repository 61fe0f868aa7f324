use uuid::Uuid;

use super::TargetIdentity;

/// Build the recipient from raw request fields.
///
/// No user id means broadcast. The user name is carried along as given and
/// never checked; whether the user exists is the sender's concern.
pub fn resolve_target(to_user_id: Option<Uuid>, to_user_name: Option<&str>) -> Option<TargetIdentity> {
    to_user_id.map(|user_id| TargetIdentity {
        user_id,
        user_name: to_user_name.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_user_is_broadcast() {
        assert_eq!(resolve_target(None, Some("ignored")), None);
    }

    #[test]
    fn test_user_with_name() {
        let id = Uuid::new_v4();
        assert_eq!(
            resolve_target(Some(id), Some("alice")),
            Some(TargetIdentity {
                user_id: id,
                user_name: Some("alice".to_string()),
            })
        );
    }

    #[test]
    fn test_user_without_name() {
        let id = Uuid::new_v4();
        let target = resolve_target(Some(id), None).unwrap();
        assert_eq!(target.user_id, id);
        assert_eq!(target.user_name, None);
    }
}
