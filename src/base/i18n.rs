//! Localized kiosk copy.
//!
//! Everything the patient reads on screen lives here, one static table per
//! language. The triage directives are separate (see [`super::prompts`])
//! since they address the model, not the patient.

use crate::base::types::Language;

/// Display strings for one kiosk language.
#[derive(Debug)]
pub struct Strings {
    /// Header shown on every welcome screen.
    pub app_name: &'static str,
    /// Welcome screen title.
    pub welcome_title: &'static str,
    /// How to toggle the kiosk language.
    pub language_hint: &'static str,
    /// Label for the service type on the ticket.
    pub type_label: &'static str,
    /// Fee-for-service option.
    pub type_service: &'static str,
    /// Health insurance option.
    pub type_insurance: &'static str,
    /// Identity step title.
    pub identity_title: &'static str,
    /// Prompt to present the identity document.
    pub document_prompt: &'static str,
    /// Shown while the document scan runs.
    pub document_scanning: &'static str,
    /// Prefix for the extracted identity.
    pub recognized: &'static str,
    /// Prompt to look at the camera.
    pub face_prompt: &'static str,
    /// Shown while the face scan runs.
    pub face_scanning: &'static str,
    /// Shown when identity verification completes.
    pub verified: &'static str,
    /// Triage step title.
    pub triage_title: &'static str,
    /// Prompt for the symptom description.
    pub triage_prompt: &'static str,
    /// Common complaints selectable by number.
    pub quick_tags: &'static [&'static str],
    /// Shown while the recommendation request is outstanding.
    pub analyzing: &'static str,
    /// Prefix for the recommended department.
    pub suggested_dept: &'static str,
    /// Label for the confidence score.
    pub confidence: &'static str,
    /// Flags a degraded (fallback) recommendation to the patient.
    pub degraded_notice: &'static str,
    /// Asks the patient to confirm the department.
    pub confirm_prompt: &'static str,
    /// Summary step banner.
    pub summary_success: &'static str,
    /// Label for the issued ticket number.
    pub ticket_number: &'static str,
    /// Label for the patient name on the ticket.
    pub patient: &'static str,
    /// Placeholder when no name was extracted.
    pub guest: &'static str,
    /// Label for the department on the ticket.
    pub dept: &'static str,
    /// Heading above the rendered booking payload.
    pub payload_heading: &'static str,
    /// Prompt to start the next session.
    pub next_patient: &'static str,
    /// Shown for unrecognized menu input.
    pub invalid_choice: &'static str,
    /// Shown when the symptom description is empty.
    pub empty_symptoms: &'static str,
    /// The keyword that navigates one step back.
    pub back_hint: &'static str,
}

/// Vietnamese kiosk copy.
pub const VI: Strings = Strings {
    app_name: "BỆNH VIỆN ĐA KHOA - KIOSK ĐĂNG KÝ",
    welcome_title: "Chọn loại hình khám:",
    language_hint: "(gõ 'en' để chuyển sang tiếng Anh, 'vi' để quay lại tiếng Việt)",
    type_label: "Loại hình",
    type_service: "Khám Dịch Vụ",
    type_insurance: "Khám BHYT",
    identity_title: "XÁC THỰC DANH TÍNH",
    document_prompt: "Đưa CCCD/Thẻ BHYT vào khung hình rồi nhấn Enter (gõ 'back' để quay lại).",
    document_scanning: "Đang quét giấy tờ ...",
    recognized: "Đã nhận diện:",
    face_prompt: "Nhìn thẳng vào camera rồi nhấn Enter để xác thực khuôn mặt.",
    face_scanning: "Đang đối chiếu khuôn mặt ...",
    verified: "Xác thực thành công! Danh tính của bạn đã được xác nhận.",
    triage_title: "SÀNG LỌC TRIỆU CHỨNG",
    triage_prompt: "Mô tả triệu chứng của bạn (hoặc chọn số gợi ý, 'back' để quay lại):",
    quick_tags: &["Đau đầu, chóng mặt", "Đau bụng, buồn nôn", "Ho, sốt, khó thở", "Đau ngực"],
    analyzing: "Đang phân tích triệu chứng ...",
    suggested_dept: "Chuyên khoa gợi ý:",
    confidence: "Độ tin cậy:",
    degraded_notice: "(*) Gợi ý mặc định do hệ thống AI đang bận — nhân viên sẽ sàng lọc lại tại quầy.",
    confirm_prompt: "Xác nhận chuyên khoa này? (y/n)",
    summary_success: "ĐĂNG KÝ THÀNH CÔNG",
    ticket_number: "Số thứ tự:",
    patient: "Bệnh nhân",
    guest: "Khách",
    dept: "Chuyên khoa",
    payload_heading: "-- Dữ liệu đặt khám gửi đi --",
    next_patient: "Nhấn Enter để phục vụ bệnh nhân tiếp theo.",
    invalid_choice: "Lựa chọn không hợp lệ, vui lòng thử lại.",
    empty_symptoms: "Vui lòng mô tả triệu chứng trước khi tiếp tục.",
    back_hint: "back",
};

/// English kiosk copy.
pub const EN: Strings = Strings {
    app_name: "GENERAL HOSPITAL - CHECK-IN KIOSK",
    welcome_title: "Select a service type:",
    language_hint: "(type 'vi' to switch to Vietnamese, 'en' for English)",
    type_label: "Type",
    type_service: "Fee-for-service",
    type_insurance: "Health insurance (BHYT)",
    identity_title: "IDENTITY VERIFICATION",
    document_prompt: "Place your ID/insurance card in the frame and press Enter (type 'back' to go back).",
    document_scanning: "Scanning document ...",
    recognized: "Recognized:",
    face_prompt: "Look straight at the camera and press Enter to verify your face.",
    face_scanning: "Matching face ...",
    verified: "Verified! Your identity has been confirmed.",
    triage_title: "SYMPTOM TRIAGE",
    triage_prompt: "Describe your symptoms (or pick a suggestion number, 'back' to go back):",
    quick_tags: &["Headache, dizziness", "Stomach ache, nausea", "Cough, fever, shortness of breath", "Chest pain"],
    analyzing: "Analyzing symptoms ...",
    suggested_dept: "Suggested department:",
    confidence: "Confidence:",
    degraded_notice: "(*) Default suggestion because the AI system is busy — staff will re-triage at the desk.",
    confirm_prompt: "Confirm this department? (y/n)",
    summary_success: "CHECK-IN COMPLETE",
    ticket_number: "Ticket number:",
    patient: "Patient",
    guest: "Guest",
    dept: "Department",
    payload_heading: "-- Outbound booking payload --",
    next_patient: "Press Enter to serve the next patient.",
    invalid_choice: "Invalid choice, please try again.",
    empty_symptoms: "Please describe your symptoms before continuing.",
    back_hint: "back",
};

/// Look up the string table for a language.
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Vi => &VI,
        Language::En => &EN,
    }
}
