//! Thematic keyword taxonomy: tag name → trigger substrings.

/// Built-in tags, in scoring order.
///
/// `真的假的` appears twice under `有梗`; each occurrence counts as its own
/// trigger, so it scores 2 when present.
const BUILTIN_TAGS: &[(&str, &[&str])] = &[
    (
        "笑点",
        &[
            "哈哈", "笑死", "好笑", "有趣", "XDDD", "XD", "笑", "爆笑", "笑慘", "搞笑", "哭笑",
        ],
    ),
    (
        "温馨",
        &[
            "寶寶", "李包", "量角器", "謝謝", "辛苦", "加油", "祝", "早安", "晚安", "愛", "想你",
            "關心", "請說", "怎麼說", "感動",
        ],
    ),
    (
        "特殊事件",
        &[
            "生日", "快樂", "新年", "節日", "跨年", "聖誕", "畢業", "考試", "紀念", "第一次",
        ],
    ),
    (
        "有梗",
        &[
            "欸",
            "蛤",
            "喔",
            "嗯",
            "真的假的",
            "太扯",
            "天啊",
            "我的天",
            "不會吧",
            "震驚",
            "?",
            "？",
            "什麼",
            "怎麼",
            "為什麼",
            "怎麼辦",
            "真的假的",
            "真的假的啦",
            "為何",
            "why",
            "呢",
            "耶",
            "誒",
        ],
    ),
    (
        "認真",
        &[
            "討論", "認真", "專業", "分析", "研究", "解釋", "原因", "理由", "看法", "意見", "建議",
            "方案", "計畫", "議題", "事件", "問題", "解決", "方法", "策略", "目標", "方向", "規劃",
        ],
    ),
];

/// One tag and the substrings that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTriggers {
    pub tag: String,
    pub triggers: Vec<String>,
}

/// Immutable tag → triggers mapping shared by every scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    tags: Vec<TagTriggers>,
}

impl KeywordTaxonomy {
    pub fn new(tags: Vec<TagTriggers>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[TagTriggers] {
        &self.tags
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.tag.as_str())
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tag_names().any(|t| t == tag)
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        let tags = BUILTIN_TAGS
            .iter()
            .map(|(tag, triggers)| TagTriggers {
                tag: (*tag).to_string(),
                triggers: triggers.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { tags }
    }
}
