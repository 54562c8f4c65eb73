/// Alias for `Result<T, TavernError>`.
pub type TavernResult<T> = Result<T, TavernError>;

/// Errors raised when records enter the engine or are authored.
///
/// Combat math never fails; these only guard the boundary where characters,
/// monsters, and adventures are created or loaded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TavernError {
    /// A dice notation is not one of d3, d4, d6, d8, d10, d12, d20.
    #[error("unknown die: \"{0}\"")]
    UnknownDie(String),

    /// A damage type tag is not physical, magical, or psychical.
    #[error("unknown damage type: \"{0}\"")]
    UnknownDamageType(String),

    /// A challenge tag is not Minion, Lieutenant, or Boss.
    #[error("unknown challenge: \"{0}\"")]
    UnknownChallenge(String),

    /// A class tag does not name a playable class.
    #[error("unknown character class: \"{0}\"")]
    UnknownClass(String),

    /// A character name is empty or contains something other than letters and spaces.
    #[error("invalid character name: \"{0}\"")]
    InvalidCharacterName(String),

    /// A character with the same name already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateCharacter(String),

    /// A starting level is outside 1-10.
    #[error("invalid level {0}: must be between 1 and 10")]
    InvalidLevel(u32),

    /// An encounter already has a Boss and another one was added.
    #[error("there is already a Boss in the encounter")]
    BossAmountExceeded,

    /// More than one Boss was added in a single step.
    #[error("you can only add one Boss to the encounter")]
    BossesToAddExceeded,

    /// An encounter has no monsters.
    #[error("there are no monsters in the encounter")]
    EmptyEncounter,

    /// A monster count of zero was given.
    #[error("monster count for \"{0}\" must be positive")]
    InvalidMonsterCount(String),

    /// An entry position does not exist in the encounter.
    #[error("encounter has no entry at position {0}")]
    InvalidEntry(usize),

    /// The number of encounters is outside the allowed range.
    #[error("an adventure needs between {min} and {max} encounters, got {got}")]
    InvalidEncounterCount {
        /// Encounters requested.
        got: usize,
        /// Smallest allowed count.
        min: usize,
        /// Largest allowed count.
        max: usize,
    },

    /// The declared encounter count disagrees with the encounters provided.
    #[error("adventure \"{name}\" declares {declared} encounters but has {actual}")]
    EncounterCountMismatch {
        /// Adventure name.
        name: String,
        /// Value of the declared count.
        declared: usize,
        /// Number of encounters actually present.
        actual: usize,
    },

    /// An adventure with the same name already exists.
    #[error("adventure already exists: \"{0}\"")]
    DuplicateAdventure(String),

    /// Too few characters exist to field any party.
    #[error("at least {0} characters are needed to start an adventure")]
    NotEnoughCharacters(usize),

    /// A party size is outside the allowed range.
    #[error("a party needs between {min} and {max} members, got {got}")]
    InvalidPartySize {
        /// Members requested.
        got: usize,
        /// Smallest allowed party.
        min: usize,
        /// Largest allowed party.
        max: usize,
    },

    /// A roster position does not exist.
    #[error("no character at roster position {0}")]
    InvalidCharacterChoice(usize),

    /// The same character was chosen twice for one party.
    #[error("character is already in the party: \"{0}\"")]
    AlreadyInParty(String),
}
