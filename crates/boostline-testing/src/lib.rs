/*!
# Boostline Testing

Shared fixture for end-to-end engine tests. Each test gets a fresh,
migrated scratch database with one admin, one client, and one worker
already seeded; helpers drive whole lifecycles (create-and-approve a
campaign, claim-submit-approve a task) so scenario files stay focused on
the transition under test.
*/

pub mod test_fixture;

pub use test_fixture::TestFixture;
