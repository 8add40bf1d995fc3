//! Role Catalog — immutable role id → keyword table, built once at startup.

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Serialize;

/// Static definition of a built-in role.
#[derive(Debug, Clone, Copy)]
pub struct RoleDef {
    pub id: &'static str,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
}

pub const DEFAULT_ROLE_ID: &str = "fullstack";

/// Built-in roles, in the order they are offered on the upload form.
pub const BUILTIN_ROLES: &[RoleDef] = &[
    RoleDef {
        id: "fullstack",
        title: "Fullstack Developer",
        keywords: &[
            "python",
            "javascript",
            "react",
            "node",
            "sql",
            "mongodb",
            "typescript",
            "aws",
        ],
    },
    RoleDef {
        id: "frontend",
        title: "Frontend Developer",
        keywords: &[
            "javascript",
            "react",
            "html",
            "css",
            "redux",
            "typescript",
            "tailwind",
            "webpack",
        ],
    },
    RoleDef {
        id: "backend",
        title: "Backend Developer",
        keywords: &[
            "node", "express", "mongodb", "sql", "api", "docker", "java", "go",
        ],
    },
    RoleDef {
        id: "datascientist",
        title: "Data Scientist",
        keywords: &[
            "python",
            "pandas",
            "numpy",
            "machine learning",
            "sql",
            "tensorflow",
            "r",
            "statistics",
        ],
    },
];

/// A resolved role: identifier, ordered keyword set, and derived display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: String,
    pub title: String,
    pub display_name: String,
    pub keywords: Vec<String>,
}

impl Role {
    fn from_def(def: &RoleDef) -> Self {
        let mut keywords: Vec<String> = Vec::with_capacity(def.keywords.len());
        for kw in def.keywords {
            let kw = kw.to_lowercase();
            // Keywords are unique within a role; later duplicates are dropped.
            if !keywords.contains(&kw) {
                keywords.push(kw);
            }
        }
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            display_name: display_name(def.id),
            keywords,
        }
    }
}

/// Read-only role table. Lookups never fail: unknown ids resolve to the default role.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl RoleCatalog {
    /// Builds a catalog from role definitions. Fails if `default_id` is not among them.
    pub fn new(defs: &[RoleDef], default_id: &str) -> Result<Self> {
        let roles: Vec<Role> = defs.iter().map(Role::from_def).collect();
        let index: HashMap<String, usize> = roles
            .iter()
            .enumerate()
            .map(|(i, role)| (role.id.clone(), i))
            .collect();

        let Some(&default_index) = index.get(default_id) else {
            bail!("Default role '{default_id}' is not defined in the role catalog");
        };

        Ok(Self {
            roles,
            index,
            default_index,
        })
    }

    /// The built-in catalog with the given default role.
    pub fn builtin(default_id: &str) -> Result<Self> {
        Self::new(BUILTIN_ROLES, default_id)
    }

    /// Resolves a role id to its role. Absent, blank, or unknown ids fall back to the default.
    pub fn resolve(&self, role_id: Option<&str>) -> &Role {
        role_id
            .map(str::trim)
            .and_then(|id| self.index.get(id))
            .map(|&i| &self.roles[i])
            .unwrap_or_else(|| self.default_role())
    }

    pub fn default_role(&self) -> &Role {
        &self.roles[self.default_index]
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

/// Turns a role id into a human label: a space goes between a lowercase letter
/// and a following uppercase letter, then each word's first letter is uppercased.
///
/// `"fullstack"` → `"Fullstack"`, `"dataScientist"` → `"Data Scientist"`.
/// Existing spaces also separate words; the rest of each word keeps its case.
pub fn display_name(role_id: &str) -> String {
    let mut spaced = String::with_capacity(role_id.len() + 4);
    let mut prev: Option<char> = None;
    for c in role_id.chars() {
        if let Some(p) = prev {
            if p.is_lowercase() && c.is_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
