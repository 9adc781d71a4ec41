//! Templates shipped with the binary.

use super::TemplateDefinition;
use crate::placeholder::PlaceholderRecord;

/// The catalog used when `catalog.path` is not configured.
pub fn builtin_templates() -> Vec<TemplateDefinition> {
    vec![
        TemplateDefinition {
            id: "welcome".to_string(),
            name: "Welcome message".to_string(),
            description: Some("Sent once an account has been created.".to_string()),
            body: "Welcome aboard, {username}! Your workspace {workspace} is ready.".to_string(),
            placeholders: Some(vec![
                PlaceholderRecord::new("username", "{username}")
                    .with_description("the member's display name"),
                PlaceholderRecord::new("workspace", "{workspace}")
                    .with_description("workspace name"),
            ]),
        },
        TemplateDefinition {
            id: "invite".to_string(),
            name: "Invitation".to_string(),
            description: Some("Invites someone to join a workspace.".to_string()),
            body: "{inviter} invited you to {workspace}. Accept before {expires}: {link}"
                .to_string(),
            placeholders: Some(vec![
                PlaceholderRecord::new("inviter", "{inviter}")
                    .with_description("who sent the invite"),
                PlaceholderRecord::new("workspace", "{workspace}"),
                PlaceholderRecord::new("expires", "{expires}").with_description("expiry date"),
                PlaceholderRecord::new("link", "{link}"),
            ]),
        },
        TemplateDefinition {
            id: "digest".to_string(),
            name: "Weekly digest".to_string(),
            description: None,
            body: "Hi {username}, you have {count} unread updates.".to_string(),
            placeholders: None,
        },
    ]
}
