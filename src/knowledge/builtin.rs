//! The academy answer table compiled into the binary.
//!
//! Order matters: exact matching returns the first record with a matching
//! keyword, so specific topics sit above general ones and small talk sits
//! last.

use crate::knowledge::record::{AnswerRecord, FallbackReplies};
use crate::knowledge::table::AnswerTable;

/// Build the built-in table.
pub fn academy_table() -> AnswerTable {
    AnswerTable::from_parts(academy_records(), FallbackReplies::default())
}

fn academy_records() -> Vec<AnswerRecord> {
    vec![
        AnswerRecord::new(
            "free_demo",
            &[
                "free class",
                "free course",
                "demo class",
                "trial class",
                "free trial",
            ],
            &[
                "ফ্রী ক্লাস",
                "ফ্রি ক্লাস",
                "ডেমো ক্লাস",
                "ট্রায়াল ক্লাস",
                "ফ্রী ট্রায়াল",
            ],
            "Sorry! \n Currently, we don't offer any free classes. If we arrange one in the future, we will definitely notify you.",
            "দুঃখিত! বর্তমানে আমরা কোনো ফ্রি ক্লাস অফার করছি না। ভবিষ্যতে যদি কোনো ফ্রি ক্লাসের ব্যবস্থা করি, অবশ্যই আপনাকে জানানো হবে।",
        ),
        AnswerRecord::new(
            "guidance",
            &[
                "which course should i take",
                "what should i learn",
                "choose course",
                "select course",
                "career guidance",
                "help me choose",
            ],
            &[
                "কোন কোর্সটা নিব",
                "কি শিখব",
                "কোর্স বাছাই",
                "গাইডলাইন",
                "ক্যারিয়ার গাইড",
                "কোনটা শিখব",
            ],
            "To choose the right course, first identify your goal (job, skill, or project). Then check your current skill level and match it with a course that fits your experience. Finally, review the syllabus, duration, and career outcome to confirm it aligns with your objective. \n And we codesell academy here to help you to kickstart your tech journey. \n For more information, please contact with us.",
            "সঠিক কোর্স বেছে নিতে প্রথমে আপনার লক্ষ্য নির্ধারণ করুন (চাকরি, দক্ষতা, বা প্রজেক্ট)। এরপর নিজের বর্তমান দক্ষতার স্তর মূল্যায়ন করে সেই অনুযায়ী উপযুক্ত কোর্স মিলিয়ে নিন। শেষে সিলেবাস, সময়কাল এবং ক্যারিয়ার ফলাফল দেখে নিশ্চিত করুন কোর্সটি আপনার লক্ষ্য পূরণে সহায়ক হবে। \n আপনার এই পথচলায় সাথে রয়েছি কোডসেল একাডেমী । \n আরো বিস্তারিত জানতে জানতে আমাদের সাথে যোগাযোগ করুন ।",
        ),
        AnswerRecord::new(
            "online_class",
            &[
                "online class",
                "online classes",
                "virtual class",
                "take class online",
            ],
            &[
                "অনলাইন ক্লাস",
                "অনলাইন কোর্স",
                "অনলাইনে ক্লাস",
                "অনলাইনে পড়ানো",
            ],
            "🖥️ Yes! We provide live online classes with recordings, teacher support, and assignments.",
            "🖥️ হ্যাঁ! আমরা লাইভ অনলাইন ক্লাস, রেকর্ডিং, শিক্ষক সাপোর্ট এবং অ্যাসাইনমেন্টসহ ক্লাস প্রদান করি।",
        ),
        AnswerRecord::new(
            "fees",
            &[
                "course fee",
                "how much",
                "cost",
                "price",
                "tuition fee",
                "payment",
            ],
            &[
                "কোর্স ফি",
                "কত টাকা",
                "দাম",
                "খরচ",
                "ফি কত",
            ],
            "💰 Course fees vary:\n• Web Development: BDT 10,000 \n• Digital Marketing: BDT 10,000\n• Data Science: BDT 10,000 \n• Spoken English: BDT 3000 \n• Computer Fundamental: BDT 3000 \n\nInstallments available!",
            "💰 কোর্স ফি ভিন্ন হতে পারে:\n• ওয়েব ডেভেলপমেন্ট: ৳ ১০,০০০\n• ডিজিটাল মার্কেটিং: ৳ ১০,০০০\n• ডাটা সায়েন্স: ৳ ১০,০০০\n• স্পোকেন ইংলিশ: ৳ ৩০০০ \n• কম্পিউটার ফান্ডামেন্টাল: ৳ ৩০০০\n\nকিস্তিতে পরিশোধের সুবিধা আছে।",
        ),
        AnswerRecord::new(
            "duration",
            &[
                "duration",
                "how long",
                "course duration",
                "months",
            ],
            &[
                "কতদিন",
                "সময়",
                "সময়কাল",
                "কত মাস",
            ],
            "⏰ Typical durations: \n• Web Dev - 6 months \n• Data Science - 6 months \n• Digital Marketing - 6 months \n• Computer Fundamental - 3 months \n• Spoken - 3 months",
            "⏰ সাধারণ সময়কাল: \n• Web Dev - ৬ মাস \n• Data Science - ৬ মাস \n• Digital Marketing - ৬ মাস \n• Computer Fundamental - ৩ মাস \n• Spoken - ৩ মাস",
        ),
        AnswerRecord::new(
            "courses",
            &[
                "what courses",
                "course list",
                "available courses",
                "which courses",
            ],
            &[
                "কি কি কোর্স",
                "কোর্স লিস্ট",
                "কোর্স আছে",
                "কোন কোন কোর্স",
            ],
            "📚 Our courses:\n• Web Development\n• Digital Marketing\n• Data Science \n• Spoken English\n• Programming Basics\n\nWhich course interests you?",
            "📚 আমাদের কোর্সসমূহ:\n• ওয়েব ডেভেলপমেন্ট\n• ডিজিটাল মার্কেটিং\n• ডাটা সায়েন্স \n• স্পোকেন ইংলিশ\n• প্রোগ্রামিং ব্যাসিক \n• কম্পিউটার ফান্ডামেন্টাল \n\nআপনি কোন কোর্সে আগ্রহী?",
        ),
        AnswerRecord::new(
            "contact",
            &[
                "contact",
                "phone number",
                "email",
                "reach us",
            ],
            &[
                "যোগাযোগ",
                "ফোন নম্বর",
                "ইমেইল",
                "কন্টাক্ট",
            ],
            "Contact: \n +880 1876675145 \n codesellacademy@gmail.com \n — We'll respond within 24 hours.",
            "যোগাযোগ: \n +৮৮০ ১৮৭৬৬৭৫১৪৫ \n codesellacademy@gmail.com \n — আমরা ২৪ ঘন্টার মধ্যে আপনার সাথে যোগাযোগ করব।",
        ),
        AnswerRecord::new(
            "greeting",
            &[
                "Hi",
                "how are you",
                "how r you",
                "how r u",
                "how are u",
                "how r u?",
                "how r u",
            ],
            &[
                "কেমন আছ",
                "কেমন আছেন",
                "কেমন আছো",
                "তুমি কেমন",
                "আপনি কেমন",
            ],
            "😊 I'm doing great! How can I help you today?",
            "😊 আমি ভালো আছি! কিভাবে আপনাকে সাহায্য করতে পারি?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = academy_table();
        assert!(table.validate().is_ok());
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_specific_topics_precede_general_ones() {
        let table = academy_table();
        let position = |topic: &str| {
            table
                .records()
                .iter()
                .position(|r| r.topic == topic)
                .unwrap()
        };
        assert!(position("free_demo") < position("online_class"));
        assert_eq!(position("greeting"), table.len() - 1);
    }
}
