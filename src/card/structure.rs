//! Structure validation of agent cards.
//!
//! The rules run in stages. Missing top-level fields stop validation early because
//! every later rule would trip over them. Interfaces, skills and the provider are then
//! checked exhaustively, so one pass reports every defect in them.

use super::document::{AgentDocument, AgentInterface, AgentProvider, AgentSkill, Field};
use crate::error_code::{Message, MessageCode};
use crate::validation::ValidationResult;
use url::Url;

/// Validate the required fields and shapes of an agent card.
pub fn validate_structure(card: &AgentDocument) -> ValidationResult {
    let mut messages = required_fields(card);
    if !messages.is_empty() {
        return ValidationResult::from_messages(messages);
    }

    let interfaces = match &card.supported_interfaces {
        Field::Present(list) if !list.is_empty() => list,
        _ => {
            return ValidationResult::from_messages(vec![Message::of(
                MessageCode::EmptySupportedInterfaces,
            )])
        }
    };

    for (index, iface) in interfaces.iter().enumerate() {
        validate_interface(index, iface, &mut messages);
    }

    match &card.skills {
        Field::Present(skills) => {
            for (index, skill) in skills.iter().enumerate() {
                validate_skill(index, skill, &mut messages);
            }
        }
        Field::Malformed(_) => messages.push(Message::of(MessageCode::SkillsNotSequence)),
        Field::Missing => {}
    }

    if let Field::Present(provider) = &card.provider {
        validate_provider(provider, &mut messages);
    }

    ValidationResult::from_messages(messages)
}

fn required_fields(card: &AgentDocument) -> Vec<Message> {
    let required = [
        (card.name.is_missing(), MessageCode::MissingName),
        (card.description.is_missing(), MessageCode::MissingDescription),
        (card.version.is_missing(), MessageCode::MissingVersion),
        (
            card.supported_interfaces.is_missing(),
            MessageCode::MissingSupportedInterfaces,
        ),
        (card.capabilities.is_missing(), MessageCode::MissingCapabilities),
        (
            card.default_input_modes.is_missing(),
            MessageCode::MissingDefaultInputModes,
        ),
        (
            card.default_output_modes.is_missing(),
            MessageCode::MissingDefaultOutputModes,
        ),
        (card.skills.is_missing(), MessageCode::MissingSkills),
    ];

    required
        .into_iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, code)| Message::of(code))
        .collect()
}

fn is_https_url(url: &Field<String>) -> bool {
    url.present()
        .and_then(|raw| Url::parse(raw).ok())
        .is_some_and(|parsed| parsed.scheme() == "https")
}

fn validate_interface(index: usize, iface: &AgentInterface, messages: &mut Vec<Message>) {
    let path = format!("supportedInterfaces[{}]", index);

    if iface.url.is_missing() {
        messages.push(Message::at(MessageCode::InterfaceUrlMissing, format!("{path}.url")));
    } else if !is_https_url(&iface.url) {
        messages.push(Message::at(MessageCode::InterfaceUrlNotHttps, format!("{path}.url")));
    }

    if iface.protocol_binding.is_missing() {
        messages.push(Message::at(
            MessageCode::InterfaceBindingMissing,
            format!("{path}.protocolBinding"),
        ));
    }

    if iface.protocol_version.is_missing() {
        messages.push(Message::at(
            MessageCode::InterfaceVersionMissing,
            format!("{path}.protocolVersion"),
        ));
    }
}

fn validate_skill(index: usize, skill: &AgentSkill, messages: &mut Vec<Message>) {
    let path = format!("skills[{}]", index);

    let required = [
        (skill.id.is_missing(), MessageCode::SkillIdMissing, "id"),
        (skill.name.is_missing(), MessageCode::SkillNameMissing, "name"),
        (
            skill.description.is_missing(),
            MessageCode::SkillDescriptionMissing,
            "description",
        ),
    ];
    for (missing, code, field) in required {
        if missing {
            messages.push(Message::at(code, format!("{path}.{field}")));
        }
    }

    match &skill.tags {
        Field::Missing => {
            messages.push(Message::at(MessageCode::SkillTagsMissing, format!("{path}.tags")))
        }
        Field::Present(tags) if !tags.is_empty() => {}
        _ => messages.push(Message::at(MessageCode::SkillTagsEmpty, format!("{path}.tags"))),
    }
}

fn validate_provider(provider: &AgentProvider, messages: &mut Vec<Message>) {
    if provider.url.is_missing() {
        messages.push(Message::at(MessageCode::ProviderUrlMissing, "provider.url"));
    }
    if provider.organization.is_missing() {
        messages.push(Message::at(
            MessageCode::ProviderOrganizationMissing,
            "provider.organization",
        ));
    }
}
