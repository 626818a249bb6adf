//! Static dashboard dataset behind the "Your Wellness Journey" analytics
//! page. The series are fixed sample data (there is no tracking backend);
//! chart rendering is the presentation layer's problem.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyMood {
    pub date: String,
    pub score: f64,
    pub speech_minutes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionScore {
    pub emotion: String,
    pub user: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayUsage {
    pub day: String,
    pub sessions: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDayUsage {
    pub time: String,
    pub sessions: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodBucket {
    pub name: String,
    pub value: usize,
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub average_mood: f64,
    pub total_speech_minutes: f64,
    pub total_sessions: usize,
    /// Percent change from the first to the last day of the range.
    pub mood_trend_pct: f64,
    pub speech_trend_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub daily_mood: Vec<DailyMood>,
    pub emotion_radar: Vec<EmotionScore>,
    pub weekday_usage: Vec<WeekdayUsage>,
    pub time_of_day: Vec<TimeOfDayUsage>,
}

impl DashboardData {
    /// The fixed two-week sample series the dashboard ships with.
    pub fn sample() -> Self {
        Self {
            daily_mood: daily_mood_series(),
            emotion_radar: emotion_radar_series(),
            weekday_usage: weekday_usage_series(),
            time_of_day: time_of_day_series(),
        }
    }

    pub fn summary(&self) -> SummaryStats {
        let days = &self.daily_mood;
        let total_sessions = days.len();
        let average_mood = if days.is_empty() {
            0.0
        } else {
            days.iter().map(|d| d.score).sum::<f64>() / days.len() as f64
        };
        let total_speech_minutes = days.iter().map(|d| d.speech_minutes).sum();

        let (mood_trend_pct, speech_trend_pct) = match (days.first(), days.last()) {
            (Some(first), Some(last)) if first.score > 0.0 && first.speech_minutes > 0.0 => (
                (last.score / first.score - 1.0) * 100.0,
                (last.speech_minutes / first.speech_minutes - 1.0) * 100.0,
            ),
            _ => (0.0, 0.0),
        };

        SummaryStats {
            average_mood,
            total_speech_minutes,
            total_sessions,
            mood_trend_pct,
            speech_trend_pct,
        }
    }

    /// Bucket the daily scores into the five mood bands used by the
    /// distribution pie.
    pub fn mood_distribution(&self) -> Vec<MoodBucket> {
        let count = |lo: f64, hi: f64| {
            self.daily_mood
                .iter()
                .filter(|d| d.score >= lo && d.score < hi)
                .count()
        };

        vec![
            MoodBucket {
                name: "Great (8-10)".into(),
                value: self.daily_mood.iter().filter(|d| d.score >= 8.0).count(),
            },
            MoodBucket {
                name: "Good (7-8)".into(),
                value: count(7.0, 8.0),
            },
            MoodBucket {
                name: "Neutral (5-7)".into(),
                value: count(5.0, 7.0),
            },
            MoodBucket {
                name: "Poor (3-5)".into(),
                value: count(3.0, 5.0),
            },
            MoodBucket {
                name: "Bad (0-3)".into(),
                value: count(0.0, 3.0),
            },
        ]
    }
}

fn daily_mood_series() -> Vec<DailyMood> {
    let raw: [(&str, f64, f64); 14] = [
        ("Apr 1", 6.2, 4.5),
        ("Apr 2", 5.8, 3.2),
        ("Apr 3", 7.3, 5.8),
        ("Apr 4", 6.5, 2.3),
        ("Apr 5", 8.2, 7.5),
        ("Apr 6", 7.8, 4.2),
        ("Apr 7", 8.5, 6.8),
        ("Apr 8", 7.9, 5.5),
        ("Apr 9", 7.2, 4.8),
        ("Apr 10", 8.0, 6.2),
        ("Apr 11", 7.5, 5.1),
        ("Apr 12", 8.3, 7.2),
        ("Apr 13", 8.7, 8.5),
        ("Apr 14", 8.4, 6.9),
    ];
    raw.into_iter()
        .map(|(date, score, speech_minutes)| DailyMood {
            date: date.into(),
            score,
            speech_minutes,
        })
        .collect()
}

fn emotion_radar_series() -> Vec<EmotionScore> {
    let raw: [(&str, f64, f64); 6] = [
        ("Calm", 7.0, 5.0),
        ("Happy", 6.0, 5.0),
        ("Anxious", 4.0, 6.0),
        ("Stressed", 3.0, 7.0),
        ("Energetic", 8.0, 4.0),
        ("Tired", 5.0, 6.0),
    ];
    raw.into_iter()
        .map(|(emotion, user, average)| EmotionScore {
            emotion: emotion.into(),
            user,
            average,
        })
        .collect()
}

fn weekday_usage_series() -> Vec<WeekdayUsage> {
    let raw: [(&str, u32, u32); 7] = [
        ("Monday", 5, 25),
        ("Tuesday", 4, 18),
        ("Wednesday", 6, 32),
        ("Thursday", 3, 15),
        ("Friday", 4, 22),
        ("Saturday", 7, 38),
        ("Sunday", 6, 30),
    ];
    raw.into_iter()
        .map(|(day, sessions, minutes)| WeekdayUsage {
            day: day.into(),
            sessions,
            minutes,
        })
        .collect()
}

fn time_of_day_series() -> Vec<TimeOfDayUsage> {
    let raw: [(&str, u32, u32); 4] = [
        ("Morning", 12, 28),
        ("Afternoon", 15, 36),
        ("Evening", 10, 24),
        ("Night", 5, 12),
    ];
    raw.into_iter()
        .map(|(time, sessions, percentage)| TimeOfDayUsage {
            time: time.into(),
            sessions,
            percentage,
        })
        .collect()
}
