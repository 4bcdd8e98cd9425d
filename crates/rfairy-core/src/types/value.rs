//! 評価値（Value）・段階別スコア（Score）
//!
//! 値のスケールは `Value::MATE` 付近を詰みスコアとして予約している。
//! ルール上の勝敗値（詰み・ステイルメイト・絶滅など）もこのスケールで表す。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 詰み（勝ち側の最大スコア）
    pub const MATE: Value = Value(32000);
    /// 無限大
    pub const INFINITE: Value = Value(32001);
    /// 無効値（「設定なし」を表す）
    pub const NONE: Value = Value(32002);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// 設定値の解析
    ///
    /// `win` / `loss` / `draw` / `none` または整数を受け付ける。
    pub fn parse(s: &str) -> Option<Value> {
        match s.trim() {
            "win" => Some(Self::MATE),
            "loss" => Some(-Self::MATE),
            "draw" => Some(Self::DRAW),
            "none" => Some(Self::NONE),
            other => other.parse::<i32>().ok().map(Value),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value(v)
    }
}

impl From<Value> for i32 {
    fn from(v: Value) -> i32 {
        v.0
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Value::NONE => write!(f, "none"),
            v if v == Value::MATE => write!(f, "win"),
            v if v == -Value::MATE => write!(f, "loss"),
            Value(v) => write!(f, "{v}"),
        }
    }
}

/// 対局の段階（中盤/終盤）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Mg = 0,
    Eg = 1,
}

impl Phase {
    pub const NUM: usize = 2;
    pub const ALL: [Phase; 2] = [Phase::Mg, Phase::Eg];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 中盤・終盤の組になったスコア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    pub const fn new(mg: i32, eg: i32) -> Score {
        Score { mg, eg }
    }

    #[inline]
    pub const fn get(self, phase: Phase) -> i32 {
        match phase {
            Phase::Mg => self.mg,
            Phase::Eg => self.eg,
        }
    }
}

/// 評価内訳の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Term {
    Material = 0,
    Imbalance,
    Mobility,
    Threat,
    Passed,
    Space,
    Variant,
    Winnable,
    Total,
}

impl Term {
    pub const NUM: usize = 9;

    pub const ALL: [Term; Term::NUM] = [
        Term::Material,
        Term::Imbalance,
        Term::Mobility,
        Term::Threat,
        Term::Passed,
        Term::Space,
        Term::Variant,
        Term::Winnable,
        Term::Total,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 内訳表示で使う名前
    pub const fn name(self) -> &'static str {
        match self {
            Term::Material => "material",
            Term::Imbalance => "imbalance",
            Term::Mobility => "mobility",
            Term::Threat => "threat",
            Term::Passed => "passed",
            Term::Space => "space",
            Term::Variant => "variant",
            Term::Winnable => "winnable",
            Term::Total => "total",
        }
    }
}
