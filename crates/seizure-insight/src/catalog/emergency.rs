use serde::Serialize;

/// Fixed first-aid script shown alongside every result. Unrelated to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyGuidance {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub call_emergency_if: &'static [&'static str],
    pub do_not_do: &'static [&'static str],
}

pub static EMERGENCY_GUIDANCE: EmergencyGuidance = EmergencyGuidance {
    title: "Emergency Response Guide for Epileptic Seizures",
    description: "Know what to do if someone is having a seizure:",
    steps: &[
        "Stay calm and time the seizure",
        "Remove dangerous objects from the area",
        "Don't restrain the person or put anything in their mouth",
        "Gently roll them to their side if possible",
        "Stay with them until they are fully conscious",
        "Call emergency services (911) if:",
    ],
    call_emergency_if: &[
        "The seizure lasts longer than 5 minutes",
        "The person doesn't wake up after the seizure ends",
        "Another seizure starts before the person recovers",
        "The person has difficulty breathing after the seizure",
        "The person is injured during the seizure",
        "The person has never had a seizure before",
        "The person is pregnant or has diabetes",
    ],
    do_not_do: &[
        "Do not hold the person down or try to stop their movements",
        "Do not put anything in the person's mouth",
        "Do not offer food or water until the person is fully alert",
        "Do not leave the person alone until they are fully recovered",
    ],
};
