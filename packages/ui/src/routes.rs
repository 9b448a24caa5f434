use store::Role;

/// Landing page after login for each role.
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Scheduler => "/scheduling-committee",
        Role::LoadCommittee => "/load-committee-dashboard",
        Role::Faculty => "/faculty-dashboard",
        Role::Student => "/student-dashboard",
    }
}
