//! Quick stress-relief toolkit content: the grounding technique, short
//! movement exercises, and the calming-sound library. The breathing tab is
//! the one interactive tool and lives in [`crate::breathing`].

use serde::{Deserialize, Serialize};

/// Seconds each movement exercise runs for.
pub const MOVEMENT_TIMER_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReliefTool {
    Breathing,
    Grounding,
    Movement,
    Sounds,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Sense {
    Sight,
    Touch,
    Hearing,
    Smell,
    Taste,
}

/// One step of the 5-4-3-2-1 grounding technique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingStep {
    pub sense: Sense,
    pub count: u8,
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementExercise {
    pub name: String,
    pub instructions: String,
    pub timer_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalmingSound {
    pub name: String,
    pub description: String,
}

/// Grounding steps in descending count order, engaging each of the five
/// senses in turn.
pub fn grounding_steps() -> Vec<GroundingStep> {
    vec![
        GroundingStep {
            sense: Sense::Sight,
            count: 5,
            title: "5 Things You Can See".into(),
            prompt: "Look around and name 5 things you can see right now. Focus on details and colors.".into(),
        },
        GroundingStep {
            sense: Sense::Touch,
            count: 4,
            title: "4 Things You Can Touch".into(),
            prompt: "Notice 4 things you can physically feel (your clothes, the temperature, etc.).".into(),
        },
        GroundingStep {
            sense: Sense::Hearing,
            count: 3,
            title: "3 Things You Can Hear".into(),
            prompt: "Listen for 3 sounds around you (traffic, birds, your breathing).".into(),
        },
        GroundingStep {
            sense: Sense::Smell,
            count: 2,
            title: "2 Things You Can Smell".into(),
            prompt: "Identify 2 scents you can smell right now or recall 2 favorite smells.".into(),
        },
        GroundingStep {
            sense: Sense::Taste,
            count: 1,
            title: "1 Thing You Can Taste".into(),
            prompt: "Notice 1 taste in your mouth or recall a favorite taste.".into(),
        },
    ]
}

pub fn movement_exercises() -> Vec<MovementExercise> {
    vec![
        MovementExercise {
            name: "Shoulder Rolls".into(),
            instructions: "Roll your shoulders forward 5 times, then backward 5 times. Focus on the sensation.".into(),
            timer_secs: MOVEMENT_TIMER_SECS,
        },
        MovementExercise {
            name: "Gentle Neck Stretches".into(),
            instructions: "Slowly tilt your head to each shoulder, holding for 5 seconds each side.".into(),
            timer_secs: MOVEMENT_TIMER_SECS,
        },
        MovementExercise {
            name: "Hand Clenching".into(),
            instructions: "Clench your fists tightly for 5 seconds, then release and spread your fingers wide for 5 seconds. Repeat 3 times.".into(),
            timer_secs: MOVEMENT_TIMER_SECS,
        },
    ]
}

pub fn calming_sounds() -> Vec<CalmingSound> {
    vec![
        CalmingSound {
            name: "Ocean Waves".into(),
            description: "The rhythmic sound of ocean waves can help regulate breathing and induce calm.".into(),
        },
        CalmingSound {
            name: "Gentle Rain".into(),
            description: "The soft patter of rainfall can be deeply relaxing and grounding.".into(),
        },
        CalmingSound {
            name: "Forest Sounds".into(),
            description: "Birds, rustling leaves, and gentle breezes can transport you to a peaceful natural setting.".into(),
        },
    ]
}
