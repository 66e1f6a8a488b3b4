use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

// the site configuration is baked into the bundle at compile time, since a static
// deployment has no filesystem to read from at runtime
pub const SITE_TOML: &str = include_str!("../Site.toml");

// storefront configuration
//
// branding strings and asset names shared by every page, plus the repository
// sub-path that production bundles are hosted under
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    pub short_brand: String,
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub motto: String,
    pub icon: String,
    pub logo: String,
    pub repo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand: String::from("Buck-et List Brands"),
            short_brand: String::from("Buck-et List"),
            title: String::from("Buck-et List Brands | Premium Hunting Apparel"),
            description: String::from(
                "Modern hunting gear built for the wild, crafted with Rust and style.",
            ),
            tagline: String::from("Gear built for the wild. Engineered for the hunt."),
            motto: String::from("Crafted for the Wild"),
            icon: String::from("icon.png"),
            logo: String::from("buck-et-logo.png"),
            repo: String::from("buck-et_list_brands"),
        }
    }
}

// only production bundles are served from the repository sub-path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildProfile {
    Development,
    Production,
}

impl BuildProfile {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildProfile::Development
        } else {
            BuildProfile::Production
        }
    }
}

// as with the server config, the settings live in a [site] subtable so the file
// can grow other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlSiteFile = toml::from_str(doc)?;

    if data.site.repo.contains(|c: char| c == '/' || c.is_whitespace()) {
        return Err(anyhow::Error::msg(format!(
            "repo must be a single path segment, got {:?}",
            data.site.repo
        )));
    }

    Ok(data.site)
}

#[instrument(level=Level::DEBUG)]
pub fn read_config() -> SiteConfig {
    debug!("parsing embedded site config");

    match parse_config(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, falling back to defaults: {err}");
            SiteConfig::default()
        }
    }
}

// resolved site settings
//
// this is what components actually consume; it pairs the config with the build
// profile so that every asset and link is prefixed consistently
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub profile: BuildProfile,
}

impl Default for Site {
    fn default() -> Self {
        Site::new(SiteConfig::default(), BuildProfile::current())
    }
}

impl Site {
    pub fn new(config: SiteConfig, profile: BuildProfile) -> Self {
        Site { config, profile }
    }

    pub fn base_path(&self) -> String {
        let repo = self.config.repo.trim_matches('/');

        match self.profile {
            BuildProfile::Production if !repo.is_empty() => format!("/{repo}"),
            _ => String::new(),
        }
    }

    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.base_path(), path.trim_start_matches('/'))
    }

    // hrefs for plain anchors; router links get the prefix from the router itself
    pub fn href(&self, path: &str) -> String {
        self.asset(path)
    }

    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{page} | {}", self.config.brand),
            None => self.config.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = parse_config(SITE_TOML).unwrap();

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn rejects_nested_repo() {
        let doc = SITE_TOML.replace("\"buck-et_list_brands\"", "\"a/b\"");

        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn rejects_missing_table() {
        assert!(parse_config("brand = \"nope\"").is_err());
    }

    #[test]
    fn production_prefixes_assets() {
        let site = Site::new(SiteConfig::default(), BuildProfile::Production);

        assert_eq!(site.base_path(), "/buck-et_list_brands");
        assert_eq!(
            site.asset("images/jacket.jpg"),
            "/buck-et_list_brands/images/jacket.jpg"
        );
        assert_eq!(site.href("/shop"), "/buck-et_list_brands/shop");
    }

    #[test]
    fn development_leaves_paths_alone() {
        let site = Site::new(SiteConfig::default(), BuildProfile::Development);

        assert_eq!(site.base_path(), "");
        assert_eq!(site.asset("/deer-bg.jpg"), "/deer-bg.jpg");
        assert_eq!(site.href("/"), "/");
    }

    #[test]
    fn empty_repo_means_no_prefix() {
        let config = SiteConfig {
            repo: String::new(),
            ..SiteConfig::default()
        };
        let site = Site::new(config, BuildProfile::Production);

        assert_eq!(site.asset("icon.png"), "/icon.png");
    }

    #[test]
    fn page_titles() {
        let site = Site::default();

        assert_eq!(site.page_title(None), "Buck-et List Brands | Premium Hunting Apparel");
        assert_eq!(site.page_title(Some("About")), "About | Buck-et List Brands");
    }
}
