//! Mapping from toolchain source branches to downstream image repo branches.

/// Downstream branch updated by builds of `main` and release branches.
pub const DOCKER_MAIN_BRANCH: &str = "microsoft/main";

const RELEASE_BRANCH_PREFIX: &str = "release-branch.";
const OFFICIAL_DEV_BRANCH_PREFIX: &str = "dev/official/";

/// Returns the downstream branch to update for a build of `source_branch`.
///
/// An empty string means no downstream update is needed.
pub fn target_branch(source_branch: &str) -> &str {
    if source_branch == "main" || source_branch.starts_with(RELEASE_BRANCH_PREFIX) {
        DOCKER_MAIN_BRANCH
    } else if source_branch.starts_with(OFFICIAL_DEV_BRANCH_PREFIX) {
        source_branch
    } else {
        ""
    }
}
