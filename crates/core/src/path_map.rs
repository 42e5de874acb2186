//! Home-directory relativization of remote paths.

/// Rewrites a leading home-directory prefix into `~`.
///
/// The comparison is a lexical string-prefix match against the caller's home
/// directory; nothing touches the filesystem. The resulting `~` is expanded
/// again by the *remote* shell against the *remote* account's home, which is
/// the whole portability trick: `/home/alice/proj` on the local side becomes
/// `~/proj`, which lands in `/home/bob/proj` when the remote login is `bob`.
///
/// A path that does not start with the home directory, or an unknown home
/// directory (`None`), leaves the input unchanged. Mapping is idempotent: an
/// already-mapped `~`-prefixed path no longer carries the prefix.
///
/// # Examples
///
/// ```
/// use cpu_core::path_map::relativize_home;
///
/// assert_eq!(relativize_home("/home/alice/proj", Some("/home/alice")), "~/proj");
/// assert_eq!(relativize_home("/srv/data", Some("/home/alice")), "/srv/data");
/// assert_eq!(relativize_home("~/proj", Some("/home/alice")), "~/proj");
/// ```
#[must_use]
pub fn relativize_home(path: &str, home: Option<&str>) -> String {
    match home.and_then(|home| path.strip_prefix(home)) {
        Some(rest) => format!("~{rest}"),
        None => path.to_string(),
    }
}
