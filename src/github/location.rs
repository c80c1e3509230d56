// src/github/location.rs
// =============================================================================
// Turns the <REPO> argument from the command line into an owner and a
// repository name.
//
// Supported formats:
//   - owner/repo
//   - github.com/owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/media   (extra segments ignored)
// =============================================================================

use anyhow::{anyhow, Result};

/// An owner/repository pair on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub owner: String,
    pub repo: String,
}

impl RepoLocation {
    // Example:
    //   "https://github.com/rust-lang/rust" -> owner "rust-lang", repo "rust"
    //   "rust-lang/rust"                    -> owner "rust-lang", repo "rust"
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let has_scheme = trimmed.starts_with("https://") || trimmed.starts_with("http://");
        let rest = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        let parts: Vec<&str> = if let Some(path) = rest.strip_prefix("github.com/") {
            // Full URL: anything after owner/repo (tree/main/...) is ignored
            let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
            if parts.len() < 2 {
                return Err(anyhow!("Invalid GitHub URL format: {}", input));
            }
            parts
        } else if has_scheme {
            return Err(anyhow!("Not a GitHub URL: {}", input));
        } else {
            // Shorthand must be exactly owner/repo
            let parts: Vec<&str> = rest.split('/').filter(|p| !p.is_empty()).collect();
            if parts.len() != 2 {
                return Err(anyhow!(
                    "Expected owner/repo or a GitHub URL, got: {}",
                    input
                ));
            }
            parts
        };

        let owner = parts[0].to_string();
        let repo = parts[1].strip_suffix(".git").unwrap_or(parts[1]).to_string();

        if repo.is_empty() {
            return Err(anyhow!("Missing repository name in: {}", input));
        }

        Ok(Self { owner, repo })
    }
}

impl std::fmt::Display for RepoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_clone_url() {
        let location = RepoLocation::parse("http://github.com/octo-org/photo-archive.git").unwrap();
        assert_eq!(location.owner, "octo-org");
        assert_eq!(location.repo, "photo-archive");
    }

    #[test]
    fn test_parse_strips_one_git_suffix_only() {
        let location = RepoLocation::parse("https://github.com/octo/gallery.git.git").unwrap();
        assert_eq!(location.repo, "gallery.git");

        let location = RepoLocation::parse("octo/gallery.git").unwrap();
        assert_eq!(location.repo, "gallery");
    }

    #[test]
    fn test_parse_url_with_tree_suffix() {
        let location =
            RepoLocation::parse("https://www.github.com/octo/gallery/tree/main/media").unwrap();
        assert_eq!(location.to_string(), "octo/gallery");
    }

    #[test]
    fn test_parse_host_without_scheme() {
        let location = RepoLocation::parse("github.com/octo/gallery").unwrap();
        assert_eq!(location.owner, "octo");
        assert_eq!(location.repo, "gallery");
    }

    #[test]
    fn test_parse_shorthand() {
        let location = RepoLocation::parse("  octo/gallery/ ").unwrap();
        assert_eq!(location.owner, "octo");
        assert_eq!(location.repo, "gallery");
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        assert!(RepoLocation::parse("https://bitbucket.org/octo/gallery").is_err());
        assert!(RepoLocation::parse("http://raw.githubusercontent.com/octo/gallery/main").is_err());
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        assert!(RepoLocation::parse("octo").is_err());
        assert!(RepoLocation::parse("https://github.com/octo").is_err());
    }

    #[test]
    fn test_parse_rejects_foreign_host_shorthand() {
        assert!(RepoLocation::parse("gitlab.com/user/repo").is_err());
    }

    #[test]
    fn test_parse_rejects_bare_git_suffix() {
        assert!(RepoLocation::parse("octo/.git").is_err());
    }
}
