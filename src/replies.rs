//! Persona text, reset keywords, and the keyword-to-canned-reply table.
//!
//! Classification runs against the trimmed, lowercased message text. Reset
//! keywords require an exact match; canned triggers match as substrings in
//! table order.

use rand::seq::IndexedRandom;

use crate::core::models::OutgoingMessage;

pub const DEFAULT_PERSONA: &str =
    "あなたはごりごりの備後人の50歳のおじさんで、備後弁を話します。トラックドライバーで、甘いものが大好きです。";

pub const RESET_KEYWORDS: &[&str] = &["リセット", "初期化", "クリア", "reset", "clear"];

pub const RESET_CONFIRMATION: &str = "チャットをリセットしました。";

/// Sweets shops the persona recommends. Every reply in the sweets rule names
/// exactly one of these.
pub const SWEET_SHOPS: &[&str] = &["虎屋本舗", "勉強堂", "旬月神無月"];

#[derive(Debug, Clone, Copy)]
pub struct Attachment {
    pub image_url: &'static str,
    pub preview_url: &'static str,
}

#[derive(Debug)]
pub struct CannedRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub replies: &'static [&'static str],
    pub attachment: Option<Attachment>,
}

impl CannedRule {
    /// Pick one reply, at random when the rule carries several.
    pub fn pick(&self) -> &'static str {
        let mut rng = rand::rng();
        self.replies.choose(&mut rng).copied().unwrap_or_default()
    }

    /// Reply messages for this rule: the text plus the attachment, if any.
    pub fn messages(&self) -> Vec<OutgoingMessage> {
        let mut messages = vec![OutgoingMessage::text(self.pick())];
        if let Some(attachment) = self.attachment {
            messages.push(OutgoingMessage::Image {
                original_content_url: attachment.image_url.to_string(),
                preview_image_url: attachment.preview_url.to_string(),
            });
        }
        messages
    }
}

pub static CANNED_RULES: &[CannedRule] = &[
    CannedRule {
        name: "rival",
        triggers: &["阪神", "巨人"],
        replies: &[
            "おいおい、阪神も巨人もええチームじゃけど、わしはカープ一筋じゃけえ！備後もんをなめたらいけんで！",
        ],
        attachment: None,
    },
    CannedRule {
        name: "sweets",
        triggers: &["スイーツ", "甘いもの", "甘いもん"],
        replies: &[
            "おお！スイーツ言うたら虎屋本舗のシュークリームじゃろう！福山来たらいっぺん食うてみんさい！",
            "甘いもんなら勉強堂のエクレアが一番よ！トラック停めてでも買いに行くんじゃけえ！",
            "旬月神無月のはっさく大福を知らんのんか？あれ食うたら他の大福は食えんようになるで！",
        ],
        attachment: Some(Attachment {
            image_url: "https://bingobot.example.com/static/sweets.jpg",
            preview_url: "https://bingobot.example.com/static/sweets_240.jpg",
        }),
    },
    CannedRule {
        name: "greeting",
        triggers: &["こんにちは", "やっほー"],
        replies: &[
            "おお、元気しとるんかい！今日はトラックの運転で疲れたけえ、甘いもん食べたくてたまらんわ！",
            "おお、来たんか！トラックで運びよったらええ甘いもん見つけたんじゃが、お前も食べるか？",
        ],
        attachment: None,
    },
    CannedRule {
        name: "farewell",
        triggers: &["さようなら", "バイバイ"],
        replies: &[
            "ほいじゃの、わしもトラックで次の現場行かにゃあけんけえ！また来いや！",
            "おお、また話に来いよ！今度は新しいケーキの話でもしようや！",
        ],
        attachment: None,
    },
];

#[derive(Debug)]
pub enum Classification<'a> {
    Reset,
    Canned(&'a CannedRule),
    Chat,
}

/// Classify a message text, in priority order: reset, canned table, chat.
pub fn classify(text: &str) -> Classification<'static> {
    let normalized = text.trim().to_lowercase();

    if RESET_KEYWORDS.contains(&normalized.as_str()) {
        return Classification::Reset;
    }

    for rule in CANNED_RULES {
        if rule.triggers.iter().any(|t| normalized.contains(t)) {
            return Classification::Canned(rule);
        }
    }

    Classification::Chat
}
