//! Follow-up message templates
//!
//! Provides the fixed message bodies for the 4-stage outreach sequence and
//! the per-stage scheduling offsets. Placeholders `{client_name}`, `{topic}`
//! and `{attachment}` are substituted by the composer. Stage 3 branches on
//! the detected objection; stage 4 is always the closing/scheduling message.

use crate::domain::models::ObjectionCategory;

/// Relative send offsets per stage, index 0 = stage 1
///
/// Static policy constants; the core never computes wall-clock send times.
const SEND_OFFSETS: [&str; 4] = [
    "بعد 2–3 ساعات من الاجتماع",
    "اليوم التالي 10 صباحًا",
    "بعد 48 ساعة حسب تفاعل العميل",
    "بعد 72–96 ساعة (مرحلة الإغلاق)",
];

/// Default message templates for each follow-up stage
pub struct FollowupTemplates;

impl FollowupTemplates {
    /// Stage 1 opener with an attached reference document
    pub fn opening() -> &'static str {
        r#"مرحبًا {client_name}،

سعيد جدًا بالحديث اللي كان بينّا اليوم.
ذكرت نقطة مهمة بخصوص **{topic}**، وحابب أرسل لك ملف يساعدك تبدأ الصورة بشكل أوضح:

{attachment}

أي نقطة تود نوضحها، أنا حاضر."#
    }

    /// Stage 1 opener when no document was found
    pub fn opening_bare() -> &'static str {
        r#"مرحبًا {client_name}،

سعيد جدًا بالحديث اللي كان بينّا اليوم.
ذكرت نقطة مهمة بخصوص **{topic}**، وحابب أتابع معك أول بأول.

أي نقطة تود نوضحها، أنا حاضر."#
    }

    /// Stage 2 deepener with a second attached document
    pub fn deepening() -> &'static str {
        r#"مرحبًا {client_name}،

حابب أكمل معك على نفس النقطة عشان الصورة تكون مكتملة لك.
أرفق لك ملف ثاني يعمّق نفس الفكرة اللي ركزت عليها:

{attachment}

إذا في جانب حابين نستكشفه أكثر، خبرني."#
    }

    /// Stage 2 deepener when fewer than two documents were found
    pub fn deepening_bare() -> &'static str {
        r#"مرحبًا {client_name}،

حابب أكمل معك على نفس النقطة عشان الصورة تكون مكتملة لك.
إذا في جانب حابين نستكشفه أكثر، خبرني."#
    }

    /// Stage 3 branch keyed by the classified objection
    pub fn objection_branch(objection: ObjectionCategory) -> &'static str {
        match objection {
            ObjectionCategory::Money => {
                r#"مرحبًا {client_name}،

فهمت تمامًا تركيزك على الميزانية، وهذا طبيعي جدًا في بداية أي مشروع.
عشان كذا جهزت لك **3 خيارات مرنة** تخلّي القرار سهل عليك:

• باقة البداية — أقل التزام
• باقة الوسط — توازن ممتاز
• الباقة الكاملة — أعلى عائد وأسرع نتائج

أقدر أرسل لك مقارنة واضحة بينهم."#
            }
            ObjectionCategory::Expectations => {
                r#"مرحبًا {client_name}،

ذكرت أنك حاب تشوف النتائج قبل أي خطوة — وهذا منطقي ومهم.
جهزت لك **دليل قصص نجاح حقيقية** يوضح النتائج اللي حققناها مع مشاريع مشابهة.

جاهز أفصل لك كيف نكرر نفس النتائج في مشروعك."#
            }
            ObjectionCategory::Quality => {
                r#"مرحبًا {client_name}،

تمامًا فاهم حرصك على الجودة.
أقدر أرسل لك **عينات من شغل الفريق** + **نتائج سابقة** تثبت مستوى التنفيذ.

أي نقطة تبيها بالتفصيل، جاهز لها."#
            }
            ObjectionCategory::Timeline => {
                r#"مرحبًا {client_name}،

ذكرت وقت التنفيذ، فجهزت لك **Timeline بسيط وواضح من 3 مراحل**
عشان يكون عندك تصور كامل من البداية.

أرسله لك لو حاب نراجعه معًا."#
            }
            ObjectionCategory::None => {
                "مرحبًا {client_name}، فقط أتابع معك لو حاب نكمل أي نقطة من النقاط."
            }
        }
    }

    /// Stage 4 closing/scheduling-call message, identical for every plan
    pub fn closing() -> &'static str {
        r#"مرحبًا {client_name}،

بعد ما غطينا أغلب النقاط، جاهزين نرتّب الخطوة اللي تريحك.
أقترح نحجز مكالمة قصيرة نحدد فيها الباقة المناسبة لك.

اختر الوقت اللي يناسبك، وأنا جاهز."#
    }

    /// Relative scheduling offset for a stage (1-based)
    pub fn send_offset(stage: u8) -> &'static str {
        match stage {
            1 => SEND_OFFSETS[0],
            2 => SEND_OFFSETS[1],
            3 => SEND_OFFSETS[2],
            _ => SEND_OFFSETS[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_templates_carry_placeholders() {
        for template in [
            FollowupTemplates::opening(),
            FollowupTemplates::opening_bare(),
            FollowupTemplates::deepening(),
            FollowupTemplates::deepening_bare(),
            FollowupTemplates::closing(),
        ] {
            assert!(template.contains("{client_name}"));
        }
        assert!(FollowupTemplates::opening().contains("{attachment}"));
        assert!(FollowupTemplates::deepening().contains("{attachment}"));
        assert!(!FollowupTemplates::opening_bare().contains("{attachment}"));
        assert!(!FollowupTemplates::deepening_bare().contains("{attachment}"));
    }

    #[test]
    fn every_objection_has_a_branch() {
        for objection in [
            ObjectionCategory::Money,
            ObjectionCategory::Expectations,
            ObjectionCategory::Quality,
            ObjectionCategory::Timeline,
            ObjectionCategory::None,
        ] {
            let template = FollowupTemplates::objection_branch(objection);
            assert!(template.contains("{client_name}"));
        }
    }

    #[test]
    fn money_branch_offers_three_packages() {
        let template = FollowupTemplates::objection_branch(ObjectionCategory::Money);
        assert!(template.contains("3 خيارات"));
        assert_eq!(template.matches("باقة").count(), 3);
    }

    #[test]
    fn offsets_are_ordered_and_fixed() {
        assert_eq!(FollowupTemplates::send_offset(1), SEND_OFFSETS[0]);
        assert_eq!(FollowupTemplates::send_offset(2), SEND_OFFSETS[1]);
        assert_eq!(FollowupTemplates::send_offset(3), SEND_OFFSETS[2]);
        assert_eq!(FollowupTemplates::send_offset(4), SEND_OFFSETS[3]);
    }
}
