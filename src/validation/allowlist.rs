//! Known header keys and section names
//!
//! Matching is exact and case-sensitive. Header keys are lower-cased by the
//! scanner before they get here; section names are not.

/// Valid header keys
pub static VALID_HEADERS: &[&str] = &[
    "bootstrap",
    "from",
    "includecmd",
    "mirrorurl",
    "updateurl",
    "osversion",
    "include",
    "library",
    "registry",
    "namespace",
    "stage",
    "product",
    "user",
    "regcode",
    "productpgp",
    "registerurl",
    "modules",
    "otherurl&n",
    "fingerprints",
    "setopt",
];

/// Valid section names
pub static VALID_SECTIONS: &[&str] = &[
    "help",
    "setup",
    "files",
    "labels",
    "environment",
    "pre",
    "post",
    "runscript",
    "test",
    "startscript",
    "arguments",
];

pub fn is_valid_header(key: &str) -> bool {
    VALID_HEADERS.contains(&key)
}

pub fn is_valid_section(name: &str) -> bool {
    VALID_SECTIONS.contains(&name)
}
