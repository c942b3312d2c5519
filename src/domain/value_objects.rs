use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUIDを内包する識別子のnewtypeを宣言する。
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_id!(
    /// カタログの書籍ID
    BookId
);
uuid_id!(
    /// 貸出・交換リクエストID
    RequestId
);
uuid_id!(
    /// 借りている本の記録ID
    BorrowId
);
uuid_id!(
    /// 通知ID
    NotificationId
);
uuid_id!(
    /// 現在のユーザーの蔵書の本ID
    CollectionBookId
);

/// 文字列表現を持つ列挙型のパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// `as_str`・`ALL`・`FromStr`を備えたケバブケース文字列の列挙型を宣言する。
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant { kind: $kind, value: s.to_string() }),
                }
            }
        }
    };
}

string_enum!(
    /// 書籍のジャンル
    Genre, "genre" {
        Fiction => "fiction",
        NonFiction => "non-fiction",
        Mystery => "mystery",
        Romance => "romance",
        SciFi => "sci-fi",
        Fantasy => "fantasy",
        Biography => "biography",
        History => "history",
        SelfHelp => "self-help",
    }
);

string_enum!(
    /// カタログの本の状態
    Condition, "condition" {
        LikeNew => "like-new",
        Good => "good",
        Fair => "fair",
        Poor => "poor",
    }
);

string_enum!(
    /// 今すぐ新しいリクエストを受けられるか
    Availability, "availability" {
        Available => "available",
        Unavailable => "unavailable",
    }
);

string_enum!(
    /// 本ごとの貸出方式
    LendingMode, "lending mode" {
        Borrow => "borrow",
        Swap => "swap",
        Both => "both",
    }
);

string_enum!(
    /// 読者が持ち主に送るリクエストの種類
    RequestKind, "request kind" {
        Borrow => "borrow",
        Swap => "swap",
    }
);

string_enum!(
    /// 受信は現在のユーザーの本へのリクエスト、送信は現在のユーザーが出したもの
    Direction, "direction" {
        Incoming => "incoming",
        Outgoing => "outgoing",
    }
);

impl Default for Condition {
    fn default() -> Self {
        Condition::Good
    }
}

impl Default for LendingMode {
    fn default() -> Self {
        LendingMode::Borrow
    }
}

impl RequestKind {
    /// Capitalized label used in feedback messages ("Borrow request sent …")
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::Borrow => "Borrow",
            RequestKind::Swap => "Swap",
        }
    }
}
