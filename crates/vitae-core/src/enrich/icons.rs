//! Static icon lookup tables.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;

/// Skill name -> icon asset.
const SKILL_ICONS: &[(&str, &str)] = &[
    ("javascript", "javascript.svg"),
    ("java", "java.svg"),
    ("c++", "cpp.svg"),
    ("c#", "csharp.svg"),
    ("python", "python.svg"),
    ("php", "php.svg"),
    ("typescript", "typescript.svg"),
    ("react", "react.svg"),
    ("redux", "redux.svg"),
    ("redux toolkit", "reduxtoolkit.svg"),
    ("vue", "vue.svg"),
    ("next.js", "nextjs.svg"),
    ("node.js", "nodejs.svg"),
    ("express", "express.svg"),
    ("mongodb", "mongodb.svg"),
    ("mysql", "mysql.svg"),
    ("mssql", "mssql.svg"),
    ("postgresql", "Postgresql.svg"),
    ("docker", "docker.svg"),
    ("git", "git.svg"),
    ("jenkins", "jenkins.svg"),
    ("spring", "spring.svg"),
    ("bootstrap", "bootstrap.svg"),
    ("tailwind css", "tailwindcss.svg"),
    ("wordpress", "wordpress.svg"),
    ("shopify", "shopify.svg"),
    ("figma", "figma.svg"),
    ("powershell", "powershell.svg"),
    ("azure", "azure.svg"),
    ("flutter", "flutter.svg"),
    ("dotnet", "dotnet.svg"),
    ("rest api", "restapi.svg"),
    ("graphql", "graphql.svg"),
    ("websocket", "websocket.svg"),
    ("webhooks", "webhooks.svg"),
    ("wix", "wix.svg"),
    ("mui", "mui.svg"),
    ("rust", "rust.svg"),
    ("tilda", "tilda.svg"),
    ("illustrator", "llustrator.svg"),
];

/// Education institution name -> icon asset.
const EDUCATION_ICONS: &[(&str, &str)] = &[("mirea", "mirea.svg"), ("mohawk", "mohawk.svg")];

lazy_static! {
    static ref BUILTIN: Arc<IconTables> = Arc::new(IconTables::from_pairs(
        SKILL_ICONS.iter().copied(),
        EDUCATION_ICONS.iter().copied(),
    ));
}

/// Immutable name -> icon mappings. Keys are canonicalised at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconTables {
    skills: HashMap<String, String>,
    education: HashMap<String, String>,
}

/// Lookup key for a display name: trimmed and lower-cased.
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl IconTables {
    /// Build tables from `(name, icon)` pairs.
    pub fn from_pairs<K, V>(
        skills: impl IntoIterator<Item = (K, V)>,
        education: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        fn collect<K: AsRef<str>, V: Into<String>>(
            pairs: impl IntoIterator<Item = (K, V)>,
        ) -> HashMap<String, String> {
            pairs
                .into_iter()
                .map(|(k, v)| (canonical_key(k.as_ref()), v.into()))
                .collect()
        }

        Self {
            skills: collect(skills),
            education: collect(education),
        }
    }

    /// The process-wide built-in tables, built on first use and shared.
    pub fn builtin() -> Arc<IconTables> {
        Arc::clone(&BUILTIN)
    }

    /// Icon for a skill, or `""` when unmapped.
    pub fn skill_icon(&self, name: &str) -> &str {
        self.skills
            .get(&canonical_key(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Icon for an education institution, or `""` when unmapped.
    pub fn education_icon(&self, name: &str) -> &str {
        self.education
            .get(&canonical_key(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether `icon` is an asset known to either table.
    pub fn is_known_icon(&self, icon: &str) -> bool {
        self.skills.values().chain(self.education.values()).any(|v| v == icon)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn education_count(&self) -> usize {
        self.education.len()
    }
}
