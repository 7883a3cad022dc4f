//! Static display categories and the bundled reference table

use serde::Serialize;

use crate::helpers::{encode_component, join_path};

/// A display bucket on the learn page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: &'static str,
}

/// Buckets in display order; ids match the content API's category ids
pub const CATEGORIES: &[Category] = &[
    Category {
        id: 6,
        name: "Quickstart guide",
    },
    Category {
        id: 7,
        name: "Tutorials",
    },
    Category {
        id: 8,
        name: "Tips & tricks",
    },
    Category {
        id: 9,
        name: "Videos",
    },
    Category {
        id: 10,
        name: "Webinars",
    },
];

/// A card in the reference grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl ReferenceEntry {
    /// Link to the detail view for this entry
    pub fn href(&self, reference_path: &str) -> String {
        join_path(reference_path, &encode_component(self.name))
    }
}

pub const REFERENCE: &[ReferenceEntry] = &[
    ReferenceEntry {
        name: "Java",
        icon: "/images/reference/java.svg",
        description: "Project setup, build tools, debugging and profiling for the JVM.",
    },
    ReferenceEntry {
        name: "Kotlin",
        icon: "/images/reference/kotlin.svg",
        description: "Coroutines, multiplatform projects and Gradle Kotlin DSL support.",
    },
    ReferenceEntry {
        name: "Python",
        icon: "/images/reference/python.svg",
        description: "Interpreters, virtual environments, notebooks and test runners.",
    },
    ReferenceEntry {
        name: "JavaScript & TypeScript",
        icon: "/images/reference/javascript.svg",
        description: "Node.js, package managers, bundlers and front-end frameworks.",
    },
    ReferenceEntry {
        name: "Go",
        icon: "/images/reference/go.svg",
        description: "Modules, Delve debugging and code generation.",
    },
    ReferenceEntry {
        name: "Rust",
        icon: "/images/reference/rust.svg",
        description: "Cargo workspaces, macro expansion and LLDB integration.",
    },
    ReferenceEntry {
        name: "C / C++",
        icon: "/images/reference/cpp.svg",
        description: "CMake, compilation databases, sanitizers and remote toolchains.",
    },
    ReferenceEntry {
        name: "Databases",
        icon: "/images/reference/database.svg",
        description: "Data sources, query consoles, schema diffs and data editors.",
    },
    ReferenceEntry {
        name: "Version control",
        icon: "/images/reference/vcs.svg",
        description: "Git workflows, shelves, conflict resolution and code review.",
    },
];

/// Look up a reference entry by its display name
pub fn find_reference(name: &str) -> Option<&'static ReferenceEntry> {
    REFERENCE.iter().find(|entry| entry.name == name)
}
