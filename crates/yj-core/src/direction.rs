//! Inquiry directions and keyword classification.
//!
//! A query is classified by plain substring containment against each
//! direction's keyword list. Directions are tried in [`Direction::all`] order
//! and the first hit wins; with no hit the query falls back to
//! [`Direction::Travel`]. Matching is case-sensitive and does no trimming or
//! normalisation.

use serde::{Deserialize, Serialize};

/// The topic a user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Journeys, moves, commuting.
    #[default]
    Travel,
    /// Romance and relationships.
    Love,
    /// Work and employment.
    Career,
    /// Learning and exams.
    Study,
}

const TRAVEL_KEYWORDS: &[&str] = &[
    "travel",
    "trip",
    "journey",
    "vacation",
    "holiday",
    "outing",
    "go out",
    "leave home",
    "go abroad",
    "road trip",
    "flight",
    "airport",
    "train",
    "travel plan",
    "traveling",
    "travelled",
    "traveling soon",
    "where should I go",
    "travel schedule",
    "tour",
    "backpacking",
    "travel luck",
    "travel forecast",
    "safe trip",
    "trip blessing",
    "adventure",
    "moving around",
    "commute",
    "commuting",
    "travel vibes",
    "weather for travel",
    "is it good to travel",
    "start a journey",
    "travel energy",
    "suitcase",
    "passport",
    "ride",
    "relocation",
    "business trip",
    "travel direction",
    "leave for",
    "is it a good time to travel",
    "vacation plans",
    "leaving town",
    "I’m traveling",
    "trip ahead",
    "transit",
    "transit luck",
    "travel delay",
    "trip today",
    "出行",
    "出行运",
    "旅行",
    "旅游",
    "远行",
    "出门",
    "动身",
    "外出",
    "走亲戚",
    "出差",
    "通勤",
    "探亲",
    "行程",
    "行走",
    "动向",
    "出游",
    "旅程",
    "在路上",
    "乘车",
    "火车",
    "飞机",
    "登机",
    "签证",
    "护照",
    "行李",
    "搬家",
    "离开",
    "探访",
    "是否适合出行",
    "适合出门吗",
];

const LOVE_KEYWORDS: &[&str] = &[
    "love",
    "relationship",
    "romance",
    "marriage",
    "partner",
    "couple",
    "dating",
    "breakup",
    "falling in love",
    "get back together",
    "heartbreak",
    "affection",
    "wedding",
    "emotion",
    "情感",
    "感情",
    "恋爱",
    "爱情",
    "爱人",
    "约会",
    "关系",
    "婚姻",
    "姻缘",
    "脱单",
    "分手",
    "复合",
    "暧昧",
    "表白",
    "示爱",
    "对象",
    "结婚",
    "心动",
    "配对",
    "感情建议",
    "恋情",
];

const CAREER_KEYWORDS: &[&str] = &[
    "career",
    "job",
    "work",
    "promotion",
    "entrepreneurship",
    "boss",
    "colleague",
    "office",
    "interview",
    "fired",
    "resign",
    "salary",
    "quit job",
    "change job",
    "new job",
    "employment",
    "job offer",
    "workplace",
    "company",
    "job hunt",
    "hiring",
    "get hired",
    "职场",
    "工作",
    "职业",
    "事业",
    "升职",
    "加薪",
    "老板",
    "同事",
    "面试",
    "离职",
    "跳槽",
    "创业",
    "换工作",
    "裁员",
    "找工作",
    "上班",
    "就业",
    "公司",
    "职业发展",
    "工作运势",
];

const STUDY_KEYWORDS: &[&str] = &[
    "study",
    "exam",
    "learning",
    "education",
    "research",
    "school",
    "test",
    "grade",
    "student",
    "academic",
    "homework",
    "midterm",
    "final",
    "study luck",
    "academic outlook",
    "pass the exam",
    "good score",
    "考试",
    "学业",
    "成绩",
    "学习",
    "升学",
    "研究",
    "功课",
    "考运",
    "备考",
    "学生",
    "应试",
    "分数",
    "学期",
    "读书",
    "书本",
    "课业",
    "学习运势",
    "学术发展",
];

const TRAVEL_TEMPLATE: &str = r#"Analyze travel fortune based on the I Ching hexagram:
Original Hexagram: {original_name} (Index {original_index})
Changing Hexagram: {changed_name} (Index {changed_index})

Hexagram Text: "{original_judgment}"
Image Text: "{original_image}"

Based on the above information, please analyze the user's current travel fortune, and provide specific advice along with a poetic signature for the day.
Advice may include: whether it's a good time to travel, ideal time periods, and any cautions to keep in mind.
The signature quote should be a proverb or poetic line that aligns with the hexagram's meaning."#;

const LOVE_TEMPLATE: &str = r#"Analyze love fortune based on the I Ching hexagram:
Original Hexagram: {original_name} (Index {original_index})
Changing Hexagram: {changed_name} (Index {changed_index})

Hexagram Text: "{original_judgment}"
Image Text: "{original_image}"

Based on the above information, please analyze the user's current romantic fortune, and provide practical guidance and a poetic signature.
Advice may include: relationship dynamics, emotional tendencies, communication strategies, and other notes.
The signature quote should be a proverb or poetic line that reflects the meaning of the hexagram."#;

const CAREER_TEMPLATE: &str = r#"Analyze career fortune based on the I Ching hexagram:
Original Hexagram: {original_name} (Index {original_index})
Changing Hexagram: {changed_name} (Index {changed_index})

Hexagram Text: "{original_judgment}"
Image Text: "{original_image}"

Based on the above information, please analyze the user's current career outlook, and provide actionable insights and a poetic signature.
Advice may include: development trends, decision-making strategies, opportunities to watch for, and risks to avoid.
The signature quote should be a proverb or poetic line that corresponds with the hexagram's symbolism."#;

const STUDY_TEMPLATE: &str = r#"Analyze academic fortune based on the I Ching hexagram:
Original Hexagram: {original_name} (Index {original_index})
Changing Hexagram: {changed_name} (Index {changed_index})

Hexagram Text: "{original_judgment}"
Image Text: "{original_image}"

Based on the above information, please analyze the user's academic fortune, and provide personalized advice and a poetic signature.
Advice may include: learning efficiency, exam outlook, mental focus, and recommended adjustments.
The signature quote should be a proverb or poetic line aligned with the message of the hexagram."#;

impl Direction {
    /// All directions in classification order.
    pub fn all() -> &'static [Self] {
        &[Self::Travel, Self::Love, Self::Career, Self::Study]
    }

    /// Keywords that select this direction.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Travel => TRAVEL_KEYWORDS,
            Self::Love => LOVE_KEYWORDS,
            Self::Career => CAREER_KEYWORDS,
            Self::Study => STUDY_KEYWORDS,
        }
    }

    /// Prompt template with `{placeholder}` fields.
    ///
    /// See [`crate::compose::render_prompt`] for the placeholder names.
    pub fn template(self) -> &'static str {
        match self {
            Self::Travel => TRAVEL_TEMPLATE,
            Self::Love => LOVE_TEMPLATE,
            Self::Career => CAREER_TEMPLATE,
            Self::Study => STUDY_TEMPLATE,
        }
    }

    /// English label shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Love => "Love",
            Self::Career => "Career",
            Self::Study => "Study",
        }
    }

    /// Parse a menu choice: an English label (any case), a Chinese label, or
    /// a menu number `1`-`4`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "travel" | "出行" => Some(Self::Travel),
            "2" | "love" | "感情" => Some(Self::Love),
            "3" | "career" | "事业" => Some(Self::Career),
            "4" | "study" | "学业" => Some(Self::Study),
            _ => None,
        }
    }

    fn matches(self, query: &str) -> bool {
        self.keywords().iter().any(|kw| query.contains(kw))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify free text into a direction. Never fails.
pub fn classify(query: &str) -> Direction {
    Direction::all()
        .iter()
        .copied()
        .find(|d| d.matches(query))
        .unwrap_or_default()
}
