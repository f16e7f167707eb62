//! Generators: identifiers, digests, passwords

use crate::catalog::types::ToolDescriptor;

pub fn generator_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            id: "uuid-generator",
            name: "UUID Generator",
            description: "Generate random version 4 UUIDs, one or a hundred at a time.",
            category: "generators",
            path: "/tools/uuid-generator",
        },
        ToolDescriptor {
            id: "hash-generator",
            name: "Hash Generator",
            description: "Compute MD5 and SHA-256 digests of any text.",
            category: "generators",
            path: "/tools/hash-generator",
        },
        ToolDescriptor {
            id: "password-generator",
            name: "Password Generator",
            description: "Create strong random passwords with a chosen length and character set.",
            category: "generators",
            path: "/tools/password-generator",
        },
    ]
}
