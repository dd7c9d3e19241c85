use sinus_types::{Engine, Identity, Privileges, UserRecord};

/// The privileges an action needs: any one of the listed sets suffices, and a
/// set is satisfied only if all of its privileges are held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    sets: Vec<Privileges>,
}

impl Requirement {
    /// A single set of privileges, all of which are needed.
    pub fn all(privileges: Privileges) -> Self {
        Self {
            sets: vec![privileges],
        }
    }

    /// Alternatives, any one of which is enough.
    pub fn any_of(sets: &[Privileges]) -> Self {
        Self {
            sets: sets.to_vec(),
        }
    }

    pub fn sets(&self) -> &[Privileges] {
        &self.sets
    }

    /// True if `held` covers at least one of the alternatives.
    pub fn satisfied_by(&self, held: Privileges) -> bool {
        self.sets.iter().any(|required| held.contains(*required))
    }
}

impl From<Privileges> for Requirement {
    fn from(privileges: Privileges) -> Self {
        Self::all(privileges)
    }
}

/// Does this user record belong to the identity, by uid or by group?
pub fn user_matches(user: &UserRecord, identity: &Identity) -> bool {
    let uid_match = user.uid.as_deref() == Some(identity.uid.as_str());
    let group_match = user
        .group_id
        .as_ref()
        .is_some_and(|group| identity.group_ids.contains(group));
    uid_match || group_match
}

/// All users bound to an identity.
pub fn users_by_identity<'a>(
    users: &'a [UserRecord],
    identity: &'a Identity,
) -> impl Iterator<Item = &'a UserRecord> + 'a {
    users.iter().filter(move |user| user_matches(user, identity))
}

/// First user bound directly to a uid.
pub fn user_by_uid<'a>(users: &'a [UserRecord], uid: &str) -> Option<&'a UserRecord> {
    users.iter().find(|user| user.uid.as_deref() == Some(uid))
}

/// An identity is authorized if any user bound to it satisfies the requirement.
pub fn authorized(identity: &Identity, users: &[UserRecord], requirement: &Requirement) -> bool {
    users_by_identity(users, identity).any(|user| requirement.satisfied_by(user.privileges))
}

/// [`authorized`] against the host's current user list.
pub async fn check_authorized(
    engine: &dyn Engine,
    identity: &Identity,
    requirement: &Requirement,
) -> bool {
    let users = engine.users().await;
    let ok = authorized(identity, &users, requirement);
    tracing::trace!(
        "authorization of {} for {:?}: {}",
        identity.nick,
        requirement.sets(),
        ok
    );
    ok
}

/// Does the identity own a user account of its own?
pub async fn has_user(engine: &dyn Engine, identity: &Identity) -> bool {
    user_by_uid(&engine.users().await, &identity.uid).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    fn user(name: &str, uid: Option<&str>, group: Option<&str>, privileges: Privileges) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            uid: uid.map(str::to_string),
            group_id: group.map(str::to_string),
            privileges,
        }
    }

    #[test]
    fn test_single_set() {
        let users = vec![user(
            "admin",
            Some("42"),
            None,
            Privileges::PLAYBACK | Privileges::EDITBOT,
        )];
        let identity = Identity::new("42", "admin");
        assert!(authorized(
            &identity,
            &users,
            &Requirement::all(Privileges::PLAYBACK)
        ));
        assert!(authorized(
            &identity,
            &users,
            &Requirement::all(Privileges::PLAYBACK | Privileges::EDITBOT)
        ));
        assert!(!authorized(
            &identity,
            &users,
            &Requirement::all(Privileges::PLAYBACK | Privileges::ENQUEUE)
        ));
    }

    #[test]
    fn test_or_of_sets() {
        let users = vec![user("dj", Some("7"), None, Privileges::ENQUEUE)];
        let identity = Identity::new("7", "dj");
        assert!(!authorized(
            &identity,
            &users,
            &Requirement::all(Privileges::PLAYBACK)
        ));
        assert!(authorized(
            &identity,
            &users,
            &Requirement::any_of(&[Privileges::PLAYBACK, Privileges::ENQUEUE])
        ));
    }

    #[test]
    fn test_group_binding() {
        let users = vec![
            user("nobody", Some("1"), None, Privileges::NONE),
            user("mods", None, Some("role-9"), Privileges::PLAYBACK),
        ];
        let member = Identity::new("5", "member").with_groups(vec!["role-9".to_string()]);
        let stranger = Identity::new("6", "stranger").with_groups(vec!["role-1".to_string()]);
        let requirement = Requirement::all(Privileges::PLAYBACK);
        assert!(authorized(&member, &users, &requirement));
        assert!(!authorized(&stranger, &users, &requirement));
    }

    #[test]
    fn test_no_match_is_unauthorized() {
        let identity = Identity::new("99", "ghost");
        assert!(!authorized(
            &identity,
            &[],
            &Requirement::all(Privileges::NONE)
        ));
    }

    #[test]
    fn test_user_by_uid() {
        let users = vec![
            user("a", None, Some("g"), Privileges::NONE),
            user("b", Some("2"), None, Privileges::NONE),
        ];
        assert_eq!(user_by_uid(&users, "2").map(|u| u.name.as_str()), Some("b"));
        assert!(user_by_uid(&users, "g").is_none());
    }
}
