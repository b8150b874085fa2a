//! Embedded experiment results.
//!
//! Every number on the dashboard is a literal constant carried over from the
//! experiment write-up; nothing in this crate computes a metric. The dataset
//! is immutable and passed explicitly into the rendering adapter.

/// Chart seed: starting portfolio value for the trajectory charts.
pub const INITIAL_CAPITAL: f64 = 20_000_000.0;

/// Trading horizon in months (Nov 2023 - Aug 2025).
pub const TRADING_MONTHS: u32 = 21;

pub struct ProjectInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const PROJECT: ProjectInfo = ProjectInfo {
    title: "DRL ON INDIAN STOCK MARKET",
    subtitle: "Strategic Stock Trading with Deep Reinforcement Learning",
    description: "Trading NIFTY-50 Stocks with AI-Powered Algorithms",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Positive,
    Neutral,
}

pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub tone: StatTone,
}

pub const STATS: &[StatCard] = &[
    StatCard {
        label: "Initial Capital",
        value: "₹20L",
        change: "Starting Amount",
        tone: StatTone::Neutral,
    },
    StatCard {
        label: "Best Return (PPO)",
        value: "₹41.1L",
        change: "+105.5% Total Return",
        tone: StatTone::Positive,
    },
    StatCard {
        label: "Trading Period",
        value: "21 Mo",
        change: "Nov 2023 - Aug 2025",
        tone: StatTone::Neutral,
    },
    StatCard {
        label: "Stocks Traded",
        value: "50",
        change: "NIFTY-50 Index",
        tone: StatTone::Neutral,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Best,
    Good,
    Baseline,
    Conservative,
}

pub struct Badge {
    pub text: &'static str,
    pub variant: BadgeVariant,
}

/// Metric columns shown on model cards and in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    FinalValue,
    AnnualReturn,
    AnnualVolatility,
    WinRate,
    SharpeRatio,
    SortinoRatio,
    MaxDrawdown,
}

impl Metric {
    pub const ALL: &'static [Metric] = &[
        Metric::FinalValue,
        Metric::AnnualReturn,
        Metric::AnnualVolatility,
        Metric::WinRate,
        Metric::SharpeRatio,
        Metric::SortinoRatio,
        Metric::MaxDrawdown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::FinalValue => "Final Value",
            Metric::AnnualReturn => "Annual Return",
            Metric::AnnualVolatility => "Annual Volatility",
            Metric::WinRate => "Win Rate",
            Metric::SharpeRatio => "Sharpe Ratio",
            Metric::SortinoRatio => "Sortino Ratio",
            Metric::MaxDrawdown => "Max Drawdown",
        }
    }

    /// Tooltip registry key for metrics that carry an explanation.
    pub fn tooltip_key(self) -> Option<&'static str> {
        match self {
            Metric::AnnualVolatility => Some("annual_volatility"),
            Metric::WinRate => Some("win_rate"),
            Metric::SharpeRatio => Some("sharpe_ratio"),
            Metric::SortinoRatio => Some("sortino_ratio"),
            Metric::MaxDrawdown => Some("max_drawdown"),
            _ => None,
        }
    }
}

pub struct ModelResult {
    pub name: &'static str,
    pub badge: Badge,
    /// Final portfolio value in rupees.
    pub final_value: f64,
    pub annual_return_pct: f64,
    pub annual_volatility_pct: f64,
    pub win_rate_pct: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    /// Largest peak-to-trough decline in rupees (negative).
    pub max_drawdown: f64,
    pub highlight: &'static [Metric],
}

pub const MODELS: &[ModelResult] = &[
    ModelResult {
        name: "PPO",
        badge: Badge {
            text: "Best Overall",
            variant: BadgeVariant::Best,
        },
        final_value: 4_112_426.0,
        annual_return_pct: 27.14,
        annual_volatility_pct: 28.50,
        win_rate_pct: 54.2,
        sharpe_ratio: 2.92e-5,
        sortino_ratio: 2518.98,
        max_drawdown: -1_103_546.0,
        highlight: &[Metric::FinalValue, Metric::AnnualReturn],
    },
    ModelResult {
        name: "A2C",
        badge: Badge {
            text: "Strong",
            variant: BadgeVariant::Good,
        },
        final_value: 4_069_195.0,
        annual_return_pct: 26.55,
        annual_volatility_pct: 29.80,
        win_rate_pct: 52.8,
        sharpe_ratio: 3.46e-5,
        sortino_ratio: 2074.20,
        max_drawdown: -1_091_893.0,
        highlight: &[Metric::SortinoRatio],
    },
    ModelResult {
        name: "DDPG",
        badge: Badge {
            text: "Solid",
            variant: BadgeVariant::Good,
        },
        final_value: 3_961_118.0,
        annual_return_pct: 25.33,
        annual_volatility_pct: 26.20,
        win_rate_pct: 55.6,
        sharpe_ratio: 3.83e-5,
        sortino_ratio: 2566.93,
        max_drawdown: -688_812.0,
        highlight: &[Metric::SharpeRatio, Metric::SortinoRatio, Metric::MaxDrawdown],
    },
    ModelResult {
        name: "TD3",
        badge: Badge {
            text: "Stable",
            variant: BadgeVariant::Good,
        },
        final_value: 3_658_942.0,
        annual_return_pct: 21.78,
        annual_volatility_pct: 31.40,
        win_rate_pct: 51.3,
        sharpe_ratio: 2.78e-5,
        sortino_ratio: 2128.32,
        max_drawdown: -1_506_728.0,
        highlight: &[],
    },
    ModelResult {
        name: "MVO",
        badge: Badge {
            text: "Baseline",
            variant: BadgeVariant::Baseline,
        },
        final_value: 3_221_874.0,
        annual_return_pct: 16.68,
        annual_volatility_pct: 22.10,
        win_rate_pct: 49.7,
        sharpe_ratio: 3.56e-5,
        sortino_ratio: 1795.27,
        max_drawdown: -634_253.0,
        highlight: &[Metric::MaxDrawdown],
    },
    ModelResult {
        name: "SAC",
        badge: Badge {
            text: "Conservative",
            variant: BadgeVariant::Conservative,
        },
        final_value: 2_768_134.0,
        annual_return_pct: 11.16,
        annual_volatility_pct: 24.80,
        win_rate_pct: 48.5,
        sharpe_ratio: 3.53e-5,
        sortino_ratio: 988.73,
        max_drawdown: -705_494.0,
        highlight: &[],
    },
];

pub struct InfoItem {
    pub label: &'static str,
    pub value: &'static str,
    /// Tooltip registry key, when the parameter has an explanation.
    pub tooltip: Option<&'static str>,
}

pub struct InfoSection {
    pub title: &'static str,
    pub items: &'static [InfoItem],
}

pub const ENVIRONMENT: &[InfoSection] = &[
    InfoSection {
        title: "Trading Parameters",
        items: &[
            InfoItem {
                label: "Initial Capital",
                value: "₹20,00,000",
                tooltip: Some("initial_capital"),
            },
            InfoItem {
                label: "Max Shares per Trade",
                value: "100 (hmax)",
                tooltip: Some("max_stock"),
            },
            InfoItem {
                label: "Buy Transaction Cost",
                value: "0.1%",
                tooltip: Some("buy_cost_pct"),
            },
            InfoItem {
                label: "Sell Transaction Cost",
                value: "0.1%",
                tooltip: Some("sell_cost_pct"),
            },
            InfoItem {
                label: "Reward Scaling",
                value: "1e-4",
                tooltip: Some("reward_scaling"),
            },
        ],
    },
    InfoSection {
        title: "Technical Indicators",
        items: &[
            InfoItem { label: "MACD", value: "Trend Following", tooltip: Some("macd") },
            InfoItem { label: "RSI (14)", value: "Momentum", tooltip: Some("rsi") },
            InfoItem { label: "CCI (14)", value: "Momentum", tooltip: Some("cci") },
            InfoItem { label: "ADX (14)", value: "Trend Strength", tooltip: Some("adx") },
            InfoItem {
                label: "Bollinger Bands",
                value: "Volatility",
                tooltip: Some("bollinger_bands"),
            },
        ],
    },
    InfoSection {
        title: "Market Data",
        items: &[
            InfoItem { label: "Data Source", value: "NIFTY-50", tooltip: None },
            InfoItem { label: "Time Period", value: "Nov 2023 - Aug 2025", tooltip: None },
            InfoItem { label: "Total Trading Days", value: "~450 days", tooltip: None },
            InfoItem { label: "Number of Stocks", value: "50", tooltip: None },
            InfoItem { label: "Turbulence Index", value: "Enabled", tooltip: None },
        ],
    },
    InfoSection {
        title: "Training Configuration",
        items: &[
            InfoItem { label: "Training Timesteps", value: "5,000", tooltip: None },
            InfoItem { label: "State Space", value: "Stock + Indicators", tooltip: None },
            InfoItem { label: "Action Space", value: "Continuous [-1, 1]", tooltip: None },
            InfoItem { label: "Framework", value: "Stable-Baselines3", tooltip: None },
            InfoItem { label: "Environment", value: "OpenAI Gym", tooltip: None },
        ],
    },
];

pub struct Insight {
    pub title: &'static str,
    pub content: &'static str,
}

pub const INSIGHTS: &[Insight] = &[
    Insight {
        title: "PPO - Best Overall Performance",
        content: "Proximal Policy Optimization (PPO) emerged as the clear winner with a \
                  27.14% annual return and final portfolio value of ₹41.12L. Its balanced \
                  approach between exploration and exploitation made it highly effective \
                  for the volatile Indian stock market.",
    },
    Insight {
        title: "DDPG - Best Risk Management",
        content: "Deep Deterministic Policy Gradient (DDPG) showed exceptional risk \
                  management with the lowest maximum drawdown (-₹6.88L) and highest \
                  Sortino ratio (2566.93). Ideal for risk-averse investors seeking steady \
                  returns.",
    },
    Insight {
        title: "All DRL Models Outperformed Traditional MVO",
        content: "Every Deep Reinforcement Learning algorithm significantly outperformed \
                  the traditional Mean-Variance Optimization baseline. The worst-performing \
                  DRL model (SAC at 11.16% return) still beat MVO's risk-adjusted metrics \
                  in several categories.",
    },
    Insight {
        title: "Practical Application",
        content: "These results demonstrate that DRL algorithms can effectively learn \
                  complex trading patterns in real-world stock markets. The models \
                  successfully balanced the trade-off between returns and risk, adapting \
                  to market conditions dynamically.",
    },
];

pub struct BenchmarkRow {
    pub name: &'static str,
    /// Annual return reported in the FinRL literature, percent.
    pub literature_pct: f64,
    /// Annual return from this implementation, percent.
    pub ours_pct: f64,
}

pub const BENCHMARKS: &[BenchmarkRow] = &[
    BenchmarkRow { name: "PPO", literature_pct: 18.0, ours_pct: 27.14 },
    BenchmarkRow { name: "A2C", literature_pct: 17.5, ours_pct: 26.55 },
    BenchmarkRow { name: "DDPG", literature_pct: 16.8, ours_pct: 25.33 },
    BenchmarkRow { name: "TD3", literature_pct: 15.2, ours_pct: 21.78 },
];

/// One series on the portfolio trajectory chart.
pub struct TrajectorySpec {
    pub label: &'static str,
    pub final_value: f64,
    pub volatility: f64,
    pub dashed: bool,
}

pub const TRAJECTORIES: &[TrajectorySpec] = &[
    TrajectorySpec {
        label: "PPO (Best)",
        final_value: 41_100_000.0,
        volatility: 0.12,
        dashed: false,
    },
    TrajectorySpec {
        label: "A2C",
        final_value: 39_700_000.0,
        volatility: 0.14,
        dashed: false,
    },
    TrajectorySpec {
        label: "DDPG",
        final_value: 37_800_000.0,
        volatility: 0.16,
        dashed: false,
    },
    TrajectorySpec {
        label: "MVO (Baseline)",
        final_value: 28_400_000.0,
        volatility: 0.10,
        dashed: true,
    },
];

/// One curve on the daily returns distribution chart.
pub struct DistributionSpec {
    pub label: &'static str,
    pub mean: f64,
    pub std_dev: f64,
    pub dashed: bool,
}

pub const DISTRIBUTIONS: &[DistributionSpec] = &[
    DistributionSpec { label: "PPO", mean: 0.15, std_dev: 1.2, dashed: false },
    DistributionSpec { label: "A2C", mean: 0.12, std_dev: 1.4, dashed: false },
    DistributionSpec { label: "MVO", mean: 0.05, std_dev: 0.9, dashed: true },
];

/// One series on the cumulative returns chart.
pub struct CumulativeSpec {
    pub label: &'static str,
    pub annual_return_pct: f64,
    pub dashed: bool,
}

pub const CUMULATIVE_RETURNS: &[CumulativeSpec] = &[
    CumulativeSpec { label: "PPO", annual_return_pct: 27.14, dashed: false },
    CumulativeSpec { label: "A2C", annual_return_pct: 24.21, dashed: false },
    CumulativeSpec { label: "DDPG", annual_return_pct: 18.52, dashed: false },
    CumulativeSpec { label: "MVO", annual_return_pct: 9.33, dashed: true },
];

/// Hover explanation for a metric, parameter or algorithm.
pub struct Tooltip {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TOOLTIPS: &[Tooltip] = &[
    Tooltip {
        key: "initial_capital",
        title: "Initial Capital",
        description: "The starting amount of money invested in the portfolio. Set at \
                      ₹20,00,000 for our trading experiments.",
    },
    Tooltip {
        key: "max_stock",
        title: "Maximum Stock",
        description: "The maximum number of shares that can be held for any single stock \
                      at one time, set to prevent over-concentration.",
    },
    Tooltip {
        key: "buy_cost_pct",
        title: "Buy Cost Percentage",
        description: "Transaction cost percentage charged when buying stocks. Typically \
                      includes brokerage and exchange fees.",
    },
    Tooltip {
        key: "sell_cost_pct",
        title: "Sell Cost Percentage",
        description: "Transaction cost percentage charged when selling stocks. Accounts \
                      for market impact and slippage.",
    },
    Tooltip {
        key: "reward_scaling",
        title: "Reward Scaling",
        description: "A multiplier applied to normalize rewards during training, helping \
                      the agent learn more effectively.",
    },
    Tooltip {
        key: "macd",
        title: "MACD",
        description: "Moving Average Convergence Divergence - A trend-following momentum \
                      indicator showing the relationship between two moving averages.",
    },
    Tooltip {
        key: "rsi",
        title: "RSI",
        description: "Relative Strength Index - Measures the speed and magnitude of price \
                      changes to identify overbought or oversold conditions (0-100 scale).",
    },
    Tooltip {
        key: "cci",
        title: "CCI",
        description: "Commodity Channel Index - Identifies cyclical trends and measures \
                      current price level relative to average price level over time.",
    },
    Tooltip {
        key: "adx",
        title: "ADX",
        description: "Average Directional Index - Quantifies trend strength regardless of \
                      direction. Values above 25 indicate strong trends.",
    },
    Tooltip {
        key: "bollinger_bands",
        title: "Bollinger Bands",
        description: "Volatility bands placed above and below a moving average. Narrow \
                      bands suggest low volatility; wide bands suggest high volatility.",
    },
    Tooltip {
        key: "sharpe_ratio",
        title: "Sharpe Ratio",
        description: "Risk-adjusted return metric. Higher values indicate better return \
                      per unit of risk taken. Above 1 is good, above 2 is very good.",
    },
    Tooltip {
        key: "sortino_ratio",
        title: "Sortino Ratio",
        description: "Similar to Sharpe ratio but only considers downside volatility, \
                      providing a better measure of risk-adjusted returns.",
    },
    Tooltip {
        key: "max_drawdown",
        title: "Maximum Drawdown",
        description: "The largest peak-to-trough decline in portfolio value. Indicates \
                      the worst-case loss during the investment period.",
    },
    Tooltip {
        key: "annual_volatility",
        title: "Annual Volatility",
        description: "Standard deviation of returns annualized. Measures how much returns \
                      fluctuate - higher volatility means higher risk.",
    },
    Tooltip {
        key: "win_rate",
        title: "Win Rate",
        description: "Percentage of trading days that resulted in positive returns. \
                      Higher win rates indicate more consistent profitability.",
    },
    Tooltip {
        key: "ppo",
        title: "PPO (Proximal Policy Optimization)",
        description: "A policy gradient method that maintains a balance between \
                      exploration and exploitation through clipped objective functions.",
    },
    Tooltip {
        key: "a2c",
        title: "A2C (Advantage Actor-Critic)",
        description: "Combines value-based and policy-based methods using an actor \
                      (policy) and critic (value function) to improve learning stability.",
    },
    Tooltip {
        key: "ddpg",
        title: "DDPG (Deep Deterministic Policy Gradient)",
        description: "An off-policy algorithm designed for continuous action spaces, \
                      using replay buffers and target networks for stable learning.",
    },
    Tooltip {
        key: "td3",
        title: "TD3 (Twin Delayed DDPG)",
        description: "An improvement over DDPG that reduces overestimation bias using \
                      twin Q-functions and delayed policy updates.",
    },
    Tooltip {
        key: "sac",
        title: "SAC (Soft Actor-Critic)",
        description: "An off-policy algorithm that maximizes expected reward while also \
                      maximizing entropy to encourage exploration.",
    },
    Tooltip {
        key: "mvo",
        title: "MVO (Mean-Variance Optimization)",
        description: "Traditional portfolio optimization method that balances expected \
                      returns against risk (variance). Our baseline comparison.",
    },
];

/// Look up a tooltip by registry key.
pub fn find_tooltip<'a>(tooltips: &'a [Tooltip], key: &str) -> Option<&'a Tooltip> {
    tooltips.iter().find(|t| t.key == key)
}

/// Render-time settings resolved from CLI flags and config.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSpec {
    pub title: String,
    pub initial_capital: f64,
    pub periods: u32,
}

impl Default for DashboardSpec {
    fn default() -> Self {
        Self {
            title: PROJECT.title.to_string(),
            initial_capital: INITIAL_CAPITAL,
            periods: TRADING_MONTHS,
        }
    }
}
