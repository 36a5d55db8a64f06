//! Prompt templates for the triage agent.

use crate::base::types::{DEPARTMENTS, Language};

/// Vietnamese system directive for the triage agent.
pub const TRIAGE_DIRECTIVE_VI: &str = r#####"
Bạn là một trợ lý y tế AI chuyên nghiệp (AI Triage) tại quầy đăng ký khám bệnh.

Nhiệm vụ của bạn là phân tích các triệu chứng của bệnh nhân và gợi ý chuyên khoa phù hợp nhất từ danh sách khoa được cung cấp trong ngữ cảnh.  Hãy suy luận logic dựa trên y khoa.  Nếu triệu chứng không rõ ràng, hãy chọn 'NOI_KHOA' (Nội khoa).

Kết quả trả về là một đối tượng JSON duy nhất với đúng bốn trường:
- `deptCode`: mã khoa khám bệnh (VD: NOI_KHOA)
- `deptName`: tên hiển thị của khoa, bằng tiếng Việt
- `reasoning`: giải thích ngắn gọn lý do chọn khoa này cho bệnh nhân, bằng tiếng Việt
- `confidence`: độ tự tin của dự đoán, thang điểm 0-100

Không trả về bất kỳ văn bản nào ngoài đối tượng JSON.
"#####;

/// English system directive for the triage agent.
pub const TRIAGE_DIRECTIVE_EN: &str = r#####"
You are a professional AI medical triage assistant at a hospital check-in kiosk.

Analyze the patient's symptoms and suggest the single most suitable department from the department catalog provided in context.  Reason from medical knowledge.  If the symptoms are unclear, choose 'NOI_KHOA' (General Internal Medicine).

Return a single JSON object with exactly four fields:
- `deptCode`: the department code (e.g. NOI_KHOA)
- `deptName`: the department display name, in English
- `reasoning`: a short explanation of the choice, addressed to the patient, in English
- `confidence`: prediction confidence on a 0-100 scale

Return nothing but the JSON object.
"#####;

/// Get the default triage directive for a language.
pub fn default_triage_directive(language: Language) -> &'static str {
    match language {
        Language::Vi => TRIAGE_DIRECTIVE_VI,
        Language::En => TRIAGE_DIRECTIVE_EN,
    }
}

/// Department catalog string handed to the model as allowed-answer context,
/// e.g. `Nội Khoa Tổng Quát (NOI_KHOA), Ngoại Khoa (NGOAI_KHOA), ...`.
pub fn department_catalog() -> String {
    DEPARTMENTS.iter().map(|d| format!("{} ({})", d.name, d.code)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_department_once() {
        let catalog = department_catalog();

        for department in DEPARTMENTS {
            assert_eq!(catalog.matches(department.code).count(), 1, "{} missing or repeated", department.code);
        }
    }

    #[test]
    fn directives_pin_the_fallback_department() {
        assert!(TRIAGE_DIRECTIVE_VI.contains("NOI_KHOA"));
        assert!(TRIAGE_DIRECTIVE_EN.contains("NOI_KHOA"));
    }

    #[test]
    fn default_directive_follows_language() {
        assert_eq!(default_triage_directive(Language::Vi), TRIAGE_DIRECTIVE_VI);
        assert_eq!(default_triage_directive(Language::En), TRIAGE_DIRECTIVE_EN);
    }
}
