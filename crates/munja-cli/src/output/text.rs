//! Plain-text export of rendered messages.
//!
//! Produces the layout travel staff paste into bulk-SMS tools: a file
//! header, then one block per group with recipient details, a rule, and
//! the message body.

use munja::{GroupRecord, RenderedMessage};

/// Width of the `=` rule separating group blocks.
const BLOCK_RULE: usize = 60;

/// Width of the `-` rule between a group header and its message.
const HEADER_RULE: usize = 40;

/// Format rendered messages as a text document, preserving the given
/// order.
pub fn format_messages_text(messages: &[&RenderedMessage]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("여행 잔금 문자 메시지".to_string());
    lines.push(format!("총 {}개 그룹", messages.len()));
    lines.push("=".repeat(BLOCK_RULE));
    lines.push(String::new());

    for rendered in messages {
        let group = &rendered.group_info;
        lines.push(format!(
            "[{}] {} - {}",
            rendered.group_id, group.team_name, group.sender_group
        ));
        lines.push(format!("발송인: {}", group.sender));
        lines.push(format!(
            "대상자: {} ({}명)",
            group.members.join(", "),
            group.size()
        ));
        lines.push(format!("연락처: {}", contact(group)));
        lines.push("-".repeat(HEADER_RULE));
        lines.push(rendered.message.clone());
        lines.push(String::new());
        lines.push("=".repeat(BLOCK_RULE));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// The group's contact attribute, or an empty string.
fn contact(group: &GroupRecord) -> String {
    group
        .attributes
        .get("contact")
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use munja::{GroupRecord, RenderedMessage, attrs};

    use super::format_messages_text;

    fn rendered(id: &str, message: &str) -> RenderedMessage {
        let group = GroupRecord::builder()
            .group_id(id.to_string())
            .team_name("김철수팀".to_string())
            .sender_group("1팀".to_string())
            .sender("김철수".to_string())
            .members(vec!["김철수".to_string(), "이영희".to_string()])
            .attributes(attrs! { "contact" => "010-1234-5678" })
            .build();
        RenderedMessage {
            group_id: id.to_string(),
            message: message.to_string(),
            group_info: group,
        }
    }

    #[test]
    fn block_layout() {
        let message = rendered("G001", "잔금 안내드립니다.");
        let text = format_messages_text(&[&message]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "여행 잔금 문자 메시지");
        assert_eq!(lines[1], "총 1개 그룹");
        assert_eq!(lines[2], "=".repeat(60));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "[G001] 김철수팀 - 1팀");
        assert_eq!(lines[5], "발송인: 김철수");
        assert_eq!(lines[6], "대상자: 김철수, 이영희 (2명)");
        assert_eq!(lines[7], "연락처: 010-1234-5678");
        assert_eq!(lines[8], "-".repeat(40));
        assert_eq!(lines[9], "잔금 안내드립니다.");
    }

    #[test]
    fn missing_contact_is_blank() {
        let mut message = rendered("G001", "본문");
        message.group_info.attributes.clear();
        let text = format_messages_text(&[&message]);

        assert!(text.contains("연락처: \n"));
    }

    #[test]
    fn group_count_in_header() {
        let first = rendered("G001", "a");
        let second = rendered("G002", "b");
        let text = format_messages_text(&[&first, &second]);

        assert!(text.starts_with("여행 잔금 문자 메시지\n총 2개 그룹\n"));
        assert_eq!(text.matches("=".repeat(60).as_str()).count(), 3);
    }
}
