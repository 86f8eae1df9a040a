//! Project kind detection from the manifests present in a project directory

use std::path::Path;

pub const COMPOSER_MANIFEST: &str = "composer.json";
pub const NODE_MANIFEST: &str = "package.json";
pub const ARTISAN: &str = "artisan";

/// What a project directory looks like on disk.
///
/// A Laravel project is also a PHP project, and PHP projects frequently ship
/// a `package.json` for their front-end build, so these are flags rather than
/// a single enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectKind {
    pub php: bool,
    pub node: bool,
    pub laravel: bool,
}

impl ProjectKind {
    pub fn detect(dir: &Path) -> Self {
        Self {
            php: dir.join(COMPOSER_MANIFEST).is_file(),
            node: dir.join(NODE_MANIFEST).is_file(),
            laravel: dir.join(ARTISAN).is_file(),
        }
    }

    pub fn describe(&self) -> &'static str {
        match (self.laravel, self.php, self.node) {
            (true, _, _) => "laravel",
            (false, true, true) => "php+node",
            (false, true, false) => "php",
            (false, false, true) => "node",
            (false, false, false) => "unknown",
        }
    }
}
