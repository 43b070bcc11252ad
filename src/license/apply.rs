//! License profile application.
//!
//! Two-step sequence: probe the license host, then write the profile onto
//! the current-user record through the session seam. The probe comes first
//! so an unreachable host never opens a session at all. Assignment has no
//! rollback; the external application persists whatever it accepted.

use crate::error::{PflaunchError, Result};
use crate::session::Session;

use super::{LicenseProfile, Pinger, CHECK_ADVANCE_FIELD};

/// Apply `profile` to the session's current user.
///
/// Returns [`PflaunchError::HostUnreachable`] without touching `session`
/// when the probe fails.
pub fn apply_profile(
    profile: &LicenseProfile,
    host: &str,
    pinger: &dyn Pinger,
    session: &mut dyn Session,
) -> Result<()> {
    if !pinger.ping(host) {
        return Err(PflaunchError::HostUnreachable {
            host: host.to_string(),
        });
    }
    tracing::debug!("License host '{}' answered the probe", host);

    let user = session.current_user()?;
    tracing::info!("Updating license selection for user '{}'", user.name());

    user.set_flag(CHECK_ADVANCE_FIELD, false)?;
    for (field, enabled) in profile.assignments() {
        user.set_flag(field, enabled)?;
    }

    tracing::info!("License selection updated: {}", profile.keys().join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::ping::StaticPing;
    use crate::session::mock::MockSession;

    #[test]
    fn unreachable_host_never_touches_the_session() {
        let profile = LicenseProfile::from_keys(&["power-quality"]).unwrap();
        let mut session = MockSession::new();

        let err = apply_profile(&profile, "digsilent2", &StaticPing(false), &mut session)
            .unwrap_err();

        assert!(matches!(err, PflaunchError::HostUnreachable { .. }));
        assert!(session.untouched());
        assert_eq!(session.user_requests(), 0);
    }

    #[test]
    fn reachable_host_assigns_check_adv_then_all_fields() {
        let profile = LicenseProfile::from_keys(&["power-quality", "protection"]).unwrap();
        let mut session = MockSession::new();

        apply_profile(&profile, "digsilent2", &StaticPing(true), &mut session).unwrap();

        let flags = session.flags();
        assert_eq!(flags[0], (CHECK_ADVANCE_FIELD.to_string(), false));
        assert!(flags.contains(&("harm".to_string(), true)));
        assert!(flags.contains(&("prot".to_string(), true)));
        assert!(flags.contains(&("arcflash".to_string(), false)));
        // check_adv plus one assignment per table entry
        assert_eq!(flags.len(), 1 + crate::license::FEATURES.len());
    }

    #[test]
    fn empty_profile_clears_every_toggle() {
        let profile = LicenseProfile::default();
        let mut session = MockSession::new();

        apply_profile(&profile, "digsilent2", &StaticPing(true), &mut session).unwrap();

        assert!(session.flags()[1..].iter().all(|(_, enabled)| !enabled));
    }

    #[test]
    fn mid_assignment_failure_leaves_partial_state() {
        let profile = LicenseProfile::all();
        let mut session = MockSession::new().fail_flag("qdynsim");

        let err =
            apply_profile(&profile, "digsilent2", &StaticPing(true), &mut session).unwrap_err();

        assert!(matches!(err, PflaunchError::SessionError { .. }));
        // Fields before the failing one stay assigned
        assert!(session.flags().contains(&("harm".to_string(), true)));
        assert!(!session.flags().iter().any(|(f, _)| f == "stab"));
    }
}
