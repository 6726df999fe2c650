//! F1 23 appendix values.
//!
//! Advisory byte fields (weather, track, tyre compound, ...) decode into
//! closed enums that carry an `Unrecognized(raw)` arm, so a value introduced
//! by a later game patch never fails a packet. Large id tables (teams,
//! drivers, nationalities) are newtypes with a name lookup.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

macro_rules! advisory_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $raw:ty {
            $( $variant:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $variant, )+
            /// Raw value not defined by the F1 23 appendix.
            Unrecognized($raw),
        }

        impl $name {
            /// Wire value.
            pub const fn raw(self) -> $raw {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unrecognized(raw) => raw,
                }
            }

            pub const fn is_recognized(self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            /// Display label from the appendix; `None` when unrecognized.
            pub const fn label(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($label), )+
                    $name::Unrecognized(_) => None,
                }
            }
        }

        impl From<$raw> for $name {
            fn from(raw: $raw) -> Self {
                match raw {
                    $( $value => $name::$variant, )+
                    other => $name::Unrecognized(other),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.label() {
                    Some(label) => f.write_str(label),
                    None => write!(f, "Unrecognized({})", self.raw()),
                }
            }
        }
    };
}

// ── Session ──────────────────────────────────────────────────────────────────

advisory_enum! {
    pub enum Weather: u8 {
        Clear = 0 => "Clear",
        LightCloud = 1 => "Light cloud",
        Overcast = 2 => "Overcast",
        LightRain = 3 => "Light rain",
        HeavyRain = 4 => "Heavy rain",
        Storm = 5 => "Storm",
    }
}

advisory_enum! {
    /// Forecast temperature trend.
    pub enum TemperatureChange: i8 {
        Up = 0 => "Up",
        Down = 1 => "Down",
        NoChange = 2 => "No change",
    }
}

advisory_enum! {
    pub enum SessionType: u8 {
        Unknown = 0 => "Unknown",
        Practice1 = 1 => "Practice 1",
        Practice2 = 2 => "Practice 2",
        Practice3 = 3 => "Practice 3",
        ShortPractice = 4 => "Short Practice",
        Qualifying1 = 5 => "Qualifying 1",
        Qualifying2 = 6 => "Qualifying 2",
        Qualifying3 = 7 => "Qualifying 3",
        ShortQualifying = 8 => "Short Qualifying",
        OneShotQualifying = 9 => "One Shot Qualifying",
        Race = 10 => "Race",
        Race2 = 11 => "Race 2",
        Race3 = 12 => "Race 3",
        TimeTrial = 13 => "Time Trial",
    }
}

advisory_enum! {
    /// `m_trackId`; `-1` is the protocol's own "unknown".
    pub enum Track: i8 {
        Unknown = -1 => "Unknown",
        Melbourne = 0 => "Melbourne",
        PaulRicard = 1 => "Paul Ricard",
        Shanghai = 2 => "Shanghai",
        Sakhir = 3 => "Sakhir (Bahrain)",
        Catalunya = 4 => "Catalunya",
        Monaco = 5 => "Monaco",
        Montreal = 6 => "Montreal",
        Silverstone = 7 => "Silverstone",
        Hockenheim = 8 => "Hockenheim",
        Hungaroring = 9 => "Hungaroring",
        Spa = 10 => "Spa",
        Monza = 11 => "Monza",
        Singapore = 12 => "Singapore",
        Suzuka = 13 => "Suzuka",
        AbuDhabi = 14 => "Abu Dhabi",
        Texas = 15 => "Texas",
        Brazil = 16 => "Brazil",
        Austria = 17 => "Austria",
        Sochi = 18 => "Sochi",
        Mexico = 19 => "Mexico",
        Baku = 20 => "Baku (Azerbaijan)",
        SakhirShort = 21 => "Sakhir Short",
        SilverstoneShort = 22 => "Silverstone Short",
        TexasShort = 23 => "Texas Short",
        SuzukaShort = 24 => "Suzuka Short",
        Hanoi = 25 => "Hanoi",
        Zandvoort = 26 => "Zandvoort",
        Imola = 27 => "Imola",
        Portimao = 28 => "Portimão",
        Jeddah = 29 => "Jeddah",
        Miami = 30 => "Miami",
        LasVegas = 31 => "Las Vegas",
        Losail = 32 => "Losail",
    }
}

advisory_enum! {
    pub enum Formula: u8 {
        F1Modern = 0 => "F1 Modern",
        F1Classic = 1 => "F1 Classic",
        F2 = 2 => "F2",
        F1Generic = 3 => "F1 Generic",
        Beta = 4 => "Beta",
        Supercars = 5 => "Supercars",
        Esports = 6 => "Esports",
        F2_2021 = 7 => "F2 2021",
    }
}

advisory_enum! {
    /// Marshal zone flag and vehicle FIA flag.
    pub enum FiaFlag: i8 {
        Unknown = -1 => "Invalid/unknown",
        None = 0 => "None",
        Green = 1 => "Green",
        Blue = 2 => "Blue",
        Yellow = 3 => "Yellow",
        Red = 4 => "Red",
    }
}

advisory_enum! {
    pub enum SafetyCarStatus: u8 {
        None = 0 => "No safety car",
        Full = 1 => "Full",
        Virtual = 2 => "Virtual",
        FormationLap = 3 => "Formation lap",
    }
}

advisory_enum! {
    pub enum ForecastAccuracy: u8 {
        Perfect = 0 => "Perfect",
        Approximate = 1 => "Approximate",
    }
}

advisory_enum! {
    pub enum BrakingAssist: u8 {
        Off = 0 => "Off",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
    }
}

advisory_enum! {
    pub enum GearboxAssist: u8 {
        Manual = 1 => "Manual",
        ManualSuggestedGear = 2 => "Manual & suggested gear",
        Automatic = 3 => "Auto",
    }
}

advisory_enum! {
    pub enum DynamicRacingLine: u8 {
        Off = 0 => "Off",
        CornersOnly = 1 => "Corners only",
        Full = 2 => "Full",
    }
}

advisory_enum! {
    pub enum DynamicRacingLineType: u8 {
        TwoD = 0 => "2D",
        ThreeD = 1 => "3D",
    }
}

advisory_enum! {
    pub enum GameMode: u8 {
        EventMode = 0 => "Event Mode",
        GrandPrix = 3 => "Grand Prix",
        GrandPrix23 = 4 => "Grand Prix 23",
        TimeTrial = 5 => "Time Trial",
        Splitscreen = 6 => "Splitscreen",
        OnlineCustom = 7 => "Online Custom",
        OnlineLeague = 8 => "Online League",
        CareerInvitational = 11 => "Career Invitational",
        ChampionshipInvitational = 12 => "Championship Invitational",
        Championship = 13 => "Championship",
        OnlineChampionship = 14 => "Online Championship",
        OnlineWeeklyEvent = 15 => "Online Weekly Event",
        Career22 = 19 => "Career '22",
        Career22Online = 20 => "Career '22 Online",
        Career23 = 21 => "Career '23",
        Career23Online = 22 => "Career '23 Online",
        Benchmark = 127 => "Benchmark",
    }
}

advisory_enum! {
    pub enum RuleSet: u8 {
        PracticeAndQualifying = 0 => "Practice & Qualifying",
        Race = 1 => "Race",
        TimeTrial = 2 => "Time Trial",
        TimeAttack = 4 => "Time Attack",
        CheckpointChallenge = 6 => "Checkpoint Challenge",
        Autocross = 8 => "Autocross",
        Drift = 9 => "Drift",
        AverageSpeedZone = 10 => "Average Speed Zone",
        RivalDuel = 11 => "Rival Duel",
    }
}

advisory_enum! {
    pub enum SessionLength: u8 {
        None = 0 => "None",
        VeryShort = 2 => "Very short",
        Short = 3 => "Short",
        Medium = 4 => "Medium",
        MediumLong = 5 => "Medium long",
        Long = 6 => "Long",
        Full = 7 => "Full",
    }
}

advisory_enum! {
    pub enum SpeedUnit: u8 {
        Mph = 0 => "MPH",
        Kph = 1 => "KPH",
    }
}

advisory_enum! {
    pub enum TemperatureUnit: u8 {
        Celsius = 0 => "Celsius",
        Fahrenheit = 1 => "Fahrenheit",
    }
}

// ── Lap data / classification ────────────────────────────────────────────────

advisory_enum! {
    pub enum PitStatus: u8 {
        None = 0 => "None",
        Pitting = 1 => "Pitting",
        InPitArea = 2 => "In pit area",
    }
}

advisory_enum! {
    pub enum Sector: u8 {
        Sector1 = 0 => "Sector 1",
        Sector2 = 1 => "Sector 2",
        Sector3 = 2 => "Sector 3",
    }
}

advisory_enum! {
    pub enum DriverStatus: u8 {
        InGarage = 0 => "In garage",
        FlyingLap = 1 => "Flying lap",
        InLap = 2 => "In lap",
        OutLap = 3 => "Out lap",
        OnTrack = 4 => "On track",
    }
}

advisory_enum! {
    pub enum ResultStatus: u8 {
        Invalid = 0 => "Invalid",
        Inactive = 1 => "Inactive",
        Active = 2 => "Active",
        Finished = 3 => "Finished",
        DidNotFinish = 4 => "Did not finish",
        Disqualified = 5 => "Disqualified",
        NotClassified = 6 => "Not classified",
        Retired = 7 => "Retired",
    }
}

// ── Car status ───────────────────────────────────────────────────────────────

advisory_enum! {
    pub enum TractionControl: u8 {
        Off = 0 => "Off",
        Medium = 1 => "Medium",
        Full = 2 => "Full",
    }
}

advisory_enum! {
    pub enum FuelMix: u8 {
        Lean = 0 => "Lean",
        Standard = 1 => "Standard",
        Rich = 2 => "Rich",
        Max = 3 => "Max",
    }
}

advisory_enum! {
    /// Compound actually fitted.
    pub enum ActualTyreCompound: u8 {
        Intermediate = 7 => "Intermediate",
        Wet = 8 => "Wet",
        ClassicDry = 9 => "Dry (classic)",
        ClassicWet = 10 => "Wet (classic)",
        F2SuperSoft = 11 => "Super soft (F2)",
        F2Soft = 12 => "Soft (F2)",
        F2Medium = 13 => "Medium (F2)",
        F2Hard = 14 => "Hard (F2)",
        F2Wet = 15 => "Wet (F2)",
        C5 = 16 => "C5",
        C4 = 17 => "C4",
        C3 = 18 => "C3",
        C2 = 19 => "C2",
        C1 = 20 => "C1",
        C0 = 21 => "C0",
    }
}

advisory_enum! {
    /// Compound shown on screen; may differ from the fitted one.
    pub enum VisualTyreCompound: u8 {
        Intermediate = 7 => "Intermediate",
        Wet = 8 => "Wet",
        ClassicDry = 9 => "Dry (classic)",
        ClassicWet = 10 => "Wet (classic)",
        F2Wet = 15 => "Wet (F2)",
        Soft = 16 => "Soft",
        Medium = 17 => "Medium",
        Hard = 18 => "Hard",
        F2SuperSoft = 19 => "Super soft (F2)",
        F2Soft = 20 => "Soft (F2)",
        F2Medium = 21 => "Medium (F2)",
        F2Hard = 22 => "Hard (F2)",
    }
}

advisory_enum! {
    pub enum ErsDeployMode: u8 {
        None = 0 => "None",
        Medium = 1 => "Medium",
        Hotlap = 2 => "Hot lap",
        Overtake = 3 => "Overtake",
    }
}

// ── Car telemetry ────────────────────────────────────────────────────────────

advisory_enum! {
    pub enum SurfaceType: u8 {
        Tarmac = 0 => "Tarmac",
        RumbleStrip = 1 => "Rumble strip",
        Concrete = 2 => "Concrete",
        Rock = 3 => "Rock",
        Gravel = 4 => "Gravel",
        Mud = 5 => "Mud",
        Sand = 6 => "Sand",
        Grass = 7 => "Grass",
        Water = 8 => "Water",
        Cobblestone = 9 => "Cobblestone",
        Metal = 10 => "Metal",
        Ridged = 11 => "Ridged",
    }
}

advisory_enum! {
    /// Multi-function display panel; 255 means closed.
    pub enum MfdPanel: u8 {
        CarSetup = 0 => "Car setup",
        Pits = 1 => "Pits",
        Damage = 2 => "Damage",
        Engine = 3 => "Engine",
        Temperatures = 4 => "Temperatures",
        Closed = 255 => "Closed",
    }
}

// ── Events ───────────────────────────────────────────────────────────────────

advisory_enum! {
    pub enum PenaltyType: u8 {
        DriveThrough = 0 => "Drive through",
        StopGo = 1 => "Stop Go",
        GridPenalty = 2 => "Grid penalty",
        PenaltyReminder = 3 => "Penalty reminder",
        TimePenalty = 4 => "Time penalty",
        Warning = 5 => "Warning",
        Disqualified = 6 => "Disqualified",
        RemovedFromFormationLap = 7 => "Removed from formation lap",
        ParkedTooLongTimer = 8 => "Parked too long timer",
        TyreRegulations = 9 => "Tyre regulations",
        ThisLapInvalidated = 10 => "This lap invalidated",
        ThisAndNextLapInvalidated = 11 => "This and next lap invalidated",
        ThisLapInvalidatedWithoutReason = 12 => "This lap invalidated without reason",
        ThisAndNextLapInvalidatedWithoutReason = 13 => "This and next lap invalidated without reason",
        ThisAndPreviousLapInvalidated = 14 => "This and previous lap invalidated",
        ThisAndPreviousLapInvalidatedWithoutReason = 15 => "This and previous lap invalidated without reason",
        Retired = 16 => "Retired",
        BlackFlagTimer = 17 => "Black flag timer",
    }
}

advisory_enum! {
    pub enum InfringementType: u8 {
        BlockingBySlowDriving = 0 => "Blocking by slow driving",
        BlockingByWrongWayDriving = 1 => "Blocking by wrong way driving",
        ReversingOffTheStartLine = 2 => "Reversing off the start line",
        BigCollision = 3 => "Big Collision",
        SmallCollision = 4 => "Small Collision",
        CollisionFailedToHandBackPositionSingle = 5 => "Collision failed to hand back position single",
        CollisionFailedToHandBackPositionMultiple = 6 => "Collision failed to hand back position multiple",
        CornerCuttingGainedTime = 7 => "Corner cutting gained time",
        CornerCuttingOvertakeSingle = 8 => "Corner cutting overtake single",
        CornerCuttingOvertakeMultiple = 9 => "Corner cutting overtake multiple",
        CrossedPitExitLane = 10 => "Crossed pit exit lane",
        IgnoringBlueFlags = 11 => "Ignoring blue flags",
        IgnoringYellowFlags = 12 => "Ignoring yellow flags",
        IgnoringDriveThrough = 13 => "Ignoring drive through",
        TooManyDriveThroughs = 14 => "Too many drive throughs",
        DriveThroughReminderServeWithinNLaps = 15 => "Drive through reminder serve within n laps",
        DriveThroughReminderServeThisLap = 16 => "Drive through reminder serve this lap",
        PitLaneSpeeding = 17 => "Pit lane speeding",
        ParkedForTooLong = 18 => "Parked for too long",
        IgnoringTyreRegulations = 19 => "Ignoring tyre regulations",
        TooManyPenalties = 20 => "Too many penalties",
        MultipleWarnings = 21 => "Multiple warnings",
        ApproachingDisqualification = 22 => "Approaching disqualification",
        TyreRegulationsSelectSingle = 23 => "Tyre regulations select single",
        TyreRegulationsSelectMultiple = 24 => "Tyre regulations select multiple",
        LapInvalidatedCornerCutting = 25 => "Lap invalidated corner cutting",
        LapInvalidatedRunningWide = 26 => "Lap invalidated running wide",
        CornerCuttingRanWideGainedTimeMinor = 27 => "Corner cutting ran wide gained time minor",
        CornerCuttingRanWideGainedTimeSignificant = 28 => "Corner cutting ran wide gained time significant",
        CornerCuttingRanWideGainedTimeExtreme = 29 => "Corner cutting ran wide gained time extreme",
        LapInvalidatedWallRiding = 30 => "Lap invalidated wall riding",
        LapInvalidatedFlashbackUsed = 31 => "Lap invalidated flashback used",
        LapInvalidatedResetToTrack = 32 => "Lap invalidated reset to track",
        BlockingThePitlane = 33 => "Blocking the pitlane",
        JumpStart = 34 => "Jump start",
        SafetyCarToCarCollision = 35 => "Safety car to car collision",
        SafetyCarIllegalOvertake = 36 => "Safety car illegal overtake",
        SafetyCarExceedingAllowedPace = 37 => "Safety car exceeding allowed pace",
        VirtualSafetyCarExceedingAllowedPace = 38 => "Virtual safety car exceeding allowed pace",
        FormationLapBelowAllowedSpeed = 39 => "Formation lap below allowed speed",
        FormationLapParking = 40 => "Formation lap parking",
        RetiredMechanicalFailure = 41 => "Retired mechanical failure",
        RetiredTerminallyDamaged = 42 => "Retired terminally damaged",
        SafetyCarFallingTooFarBack = 43 => "Safety car falling too far back",
        BlackFlagTimer = 44 => "Black flag timer",
        UnservedStopGoPenalty = 45 => "Unserved stop go penalty",
        UnservedDriveThroughPenalty = 46 => "Unserved drive through penalty",
        EngineComponentChange = 47 => "Engine component change",
        GearboxChange = 48 => "Gearbox change",
        ParcFermeChange = 49 => "Parc Fermé change",
        LeagueGridPenalty = 50 => "League grid penalty",
        RetryPenalty = 51 => "Retry penalty",
        IllegalTimeGain = 52 => "Illegal time gain",
        MandatoryPitstop = 53 => "Mandatory pitstop",
        AttributeAssigned = 54 => "Attribute assigned",
    }
}

// ── Participants / lobby ─────────────────────────────────────────────────────

advisory_enum! {
    pub enum Platform: u8 {
        Steam = 1 => "Steam",
        PlayStation = 3 => "PlayStation",
        Xbox = 4 => "Xbox",
        Origin = 6 => "Origin",
        Unknown = 255 => "Unknown",
    }
}

advisory_enum! {
    pub enum ReadyStatus: u8 {
        NotReady = 0 => "Not ready",
        Ready = 1 => "Ready",
        Spectating = 2 => "Spectating",
    }
}

/// Team id; 255 in the lobby means no team selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u8);

impl TeamId {
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "Mercedes",
            1 => "Ferrari",
            2 => "Red Bull Racing",
            3 => "Williams",
            4 => "Aston Martin",
            5 => "Alpine",
            6 => "Alpha Tauri",
            7 => "Haas",
            8 => "McLaren",
            9 => "Alfa Romeo",
            85 => "Mercedes 2020",
            86 => "Ferrari 2020",
            87 => "Red Bull 2020",
            88 => "Williams 2020",
            89 => "Racing Point 2020",
            90 => "Renault 2020",
            91 => "Alpha Tauri 2020",
            92 => "Haas 2020",
            93 => "McLaren 2020",
            94 => "Alfa Romeo 2020",
            95 => "Aston Martin DB11 V12",
            96 => "Aston Martin Vantage F1 Edition",
            97 => "Aston Martin Vantage Safety Car",
            98 => "Ferrari F8 Tributo",
            99 => "Ferrari Roma",
            100 => "McLaren 720S",
            101 => "McLaren Artura",
            102 => "Mercedes AMG GT Black Series Safety Car",
            103 => "Mercedes AMG GTR Pro",
            104 => "F1 Custom Team",
            106 => "Prema '21",
            107 => "Uni-Virtuosi '21",
            108 => "Carlin '21",
            109 => "Hitech '21",
            110 => "Art GP '21",
            111 => "MP Motorsport '21",
            112 => "Charouz '21",
            113 => "Dams '21",
            114 => "Campos '21",
            115 => "BWT '21",
            116 => "Trident '21",
            117 => "Mercedes AMG GT Black Series",
            118 => "Mercedes '22",
            119 => "Ferrari '22",
            120 => "Red Bull Racing '22",
            121 => "Williams '22",
            122 => "Aston Martin '22",
            123 => "Alpine '22",
            124 => "Alpha Tauri '22",
            125 => "Haas '22",
            126 => "McLaren '22",
            127 => "Alfa Romeo '22",
            128 => "Konnersport '22",
            129 => "Konnersport",
            130 => "Prema '22",
            131 => "Virtuosi '22",
            132 => "Carlin '22",
            133 => "MP Motorsport '22",
            134 => "Charouz '22",
            135 => "Dams '22",
            136 => "Campos '22",
            137 => "Van Amersfoort Racing '22",
            138 => "Trident '22",
            139 => "Hitech '22",
            140 => "Art GP '22",
            _ => return None,
        };
        Some(name)
    }
}

/// Driver id; 255 for a network human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u8);

impl DriverId {
    pub const NETWORK_HUMAN: DriverId = DriverId(255);

    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "Carlos Sainz",
            1 => "Daniil Kvyat",
            2 => "Daniel Ricciardo",
            3 => "Fernando Alonso",
            4 => "Felipe Massa",
            6 => "Kimi Räikkönen",
            7 => "Lewis Hamilton",
            9 => "Max Verstappen",
            10 => "Nico Hulkenburg",
            11 => "Kevin Magnussen",
            12 => "Romain Grosjean",
            13 => "Sebastian Vettel",
            14 => "Sergio Perez",
            15 => "Valtteri Bottas",
            17 => "Esteban Ocon",
            19 => "Lance Stroll",
            20 => "Arron Barnes",
            21 => "Martin Giles",
            22 => "Alex Murray",
            23 => "Lucas Roth",
            24 => "Igor Correia",
            25 => "Sophie Levasseur",
            26 => "Jonas Schiffer",
            27 => "Alain Forest",
            28 => "Jay Letourneau",
            29 => "Esto Saari",
            30 => "Yasar Atiyeh",
            31 => "Callisto Calabresi",
            32 => "Naota Izum",
            33 => "Howard Clarke",
            34 => "Wilheim Kaufmann",
            35 => "Marie Laursen",
            36 => "Flavio Nieves",
            37 => "Peter Belousov",
            38 => "Klimek Michalski",
            39 => "Santiago Moreno",
            40 => "Benjamin Coppens",
            41 => "Noah Visser",
            42 => "Gert Waldmuller",
            43 => "Julian Quesada",
            44 => "Daniel Jones",
            45 => "Artem Markelov",
            46 => "Tadasuke Makino",
            47 => "Sean Gelael",
            48 => "Nyck De Vries",
            49 => "Jack Aitken",
            50 => "George Russell",
            51 => "Maximilian Günther",
            52 => "Nirei Fukuzumi",
            53 => "Luca Ghiotto",
            54 => "Lando Norris",
            55 => "Sérgio Sette Câmara",
            56 => "Louis Delétraz",
            57 => "Antonio Fuoco",
            58 => "Charles Leclerc",
            59 => "Pierre Gasly",
            62 => "Alexander Albon",
            63 => "Nicholas Latifi",
            64 => "Dorian Boccolacci",
            65 => "Niko Kari",
            66 => "Roberto Merhi",
            67 => "Arjun Maini",
            68 => "Alessio Lorandi",
            69 => "Ruben Meijer",
            70 => "Rashid Nair",
            71 => "Jack Tremblay",
            72 => "Devon Butler",
            73 => "Lukas Weber",
            74 => "Antonio Giovinazzi",
            75 => "Robert Kubica",
            76 => "Alain Prost",
            77 => "Ayrton Senna",
            78 => "Nobuharu Matsushita",
            79 => "Nikita Mazepin",
            80 => "Guanya Zhou",
            81 => "Mick Schumacher",
            82 => "Callum Ilott",
            83 => "Juan Manuel Correa",
            84 => "Jordan King",
            85 => "Mahaveer Raghunathan",
            86 => "Tatiana Calderon",
            87 => "Anthoine Hubert",
            88 => "Guiliano Alesi",
            89 => "Ralph Boschung",
            90 => "Michael Schumacher",
            91 => "Dan Ticktum",
            92 => "Marcus Armstrong",
            93 => "Christian Lundgaard",
            94 => "Yuki Tsunoda",
            95 => "Jehan Daruvala",
            96 => "Gulherme Samaia",
            97 => "Pedro Piquet",
            98 => "Felipe Drugovich",
            99 => "Robert Schwartzman",
            100 => "Roy Nissany",
            101 => "Marino Sato",
            102 => "Aidan Jackson",
            103 => "Casper Akkerman",
            109 => "Jenson Button",
            110 => "David Coulthard",
            111 => "Nico Rosberg",
            112 => "Oscar Piastri",
            113 => "Liam Lawson",
            114 => "Juri Vips",
            115 => "Theo Pourchaire",
            116 => "Richard Verschoor",
            117 => "Lirim Zendeli",
            118 => "David Beckmann",
            121 => "Alessio Deledda",
            122 => "Bent Viscaal",
            123 => "Enzo Fittipaldi",
            125 => "Mark Webber",
            126 => "Jacques Villeneuve",
            127 => "Jake Hughes",
            128 => "Frederik Vesti",
            129 => "Olli Caldwell",
            130 => "Logan Sargeant",
            131 => "Cem Bölükbasi",
            132 => "Ayumu Iwasa",
            133 => "Clément Novalak",
            134 | 138 => "Dennis Hauger",
            135 | 139 => "Calan Williams",
            136 => "Jack Doohan",
            137 => "Amaury Cordeel",
            140 => "Jamie Chadwick",
            141 => "Kamui Kobayashi",
            142 => "Pastor Maldonado",
            143 => "Mika Hakkinen",
            144 => "Nigel Mansell",
            _ => return None,
        };
        Some(name)
    }
}

/// Driver nationality id (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalityId(pub u8);

impl NationalityId {
    pub fn name(self) -> Option<&'static str> {
        const NAMES: &[&str] = &[
            "American",       // 1
            "Argentinean",    // 2
            "Australian",     // 3
            "Austrian",       // 4
            "Azerbaijani",    // 5
            "Bahraini",       // 6
            "Belgian",        // 7
            "Bolivian",       // 8
            "Brazilian",      // 9
            "British",        // 10
            "Bulgarian",      // 11
            "Cameroonian",    // 12
            "Canadian",       // 13
            "Chilean",        // 14
            "Chinese",        // 15
            "Colombian",      // 16
            "Costa Rican",    // 17
            "Croatian",       // 18
            "Cypriot",        // 19
            "Czech",          // 20
            "Danish",         // 21
            "Dutch",          // 22
            "Ecuadorian",     // 23
            "English",        // 24
            "Emirian",        // 25
            "Estonian",       // 26
            "Finnish",        // 27
            "French",         // 28
            "German",         // 29
            "Ghanaian",       // 30
            "Greek",          // 31
            "Guatemalan",     // 32
            "Honduran",       // 33
            "Hong Konger",    // 34
            "Hungarian",      // 35
            "Icelander",      // 36
            "Indian",         // 37
            "Indonesian",     // 38
            "Irish",          // 39
            "Israeli",        // 40
            "Italian",        // 41
            "Jamaican",       // 42
            "Japanese",       // 43
            "Jordanian",      // 44
            "Kuwaiti",        // 45
            "Latvian",        // 46
            "Lebanese",       // 47
            "Lithuanian",     // 48
            "Luxembourger",   // 49
            "Malaysian",      // 50
            "Maltese",        // 51
            "Mexican",        // 52
            "Monegasque",     // 53
            "New Zealander",  // 54
            "Nicaraguan",     // 55
            "Northern Irish", // 56
            "Norwegian",      // 57
            "Omani",          // 58
            "Pakistani",      // 59
            "Panamanian",     // 60
            "Paraguayan",     // 61
            "Peruvian",       // 62
            "Polish",         // 63
            "Portuguese",     // 64
            "Qatari",         // 65
            "Romanian",       // 66
            "Russian",        // 67
            "Salvadoran",     // 68
            "Saudi",          // 69
            "Scottish",       // 70
            "Serbian",        // 71
            "Singaporean",    // 72
            "Slovakian",      // 73
            "Slovenian",      // 74
            "South Korean",   // 75
            "South African",  // 76
            "Spanish",        // 77
            "Swedish",        // 78
            "Swiss",          // 79
            "Thai",           // 80
            "Turkish",        // 81
            "Uruguayan",      // 82
            "Ukrainian",      // 83
            "Venezuelan",     // 84
            "Barbadian",      // 85
            "Welsh",          // 86
            "Vietnamese",     // 87
        ];
        let idx = usize::from(self.0).checked_sub(1)?;
        NAMES.get(idx).copied()
    }
}

// ── Bit flags ────────────────────────────────────────────────────────────────

bitflags! {
    /// Buttons held, reported by the `BUTN` event. Unknown bits are kept.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ButtonFlags: u32 {
        const CROSS_OR_A          = 0x0000_0001;
        const TRIANGLE_OR_Y       = 0x0000_0002;
        const CIRCLE_OR_B         = 0x0000_0004;
        const SQUARE_OR_X         = 0x0000_0008;
        const DPAD_LEFT           = 0x0000_0010;
        const DPAD_RIGHT          = 0x0000_0020;
        const DPAD_UP             = 0x0000_0040;
        const DPAD_DOWN           = 0x0000_0080;
        const OPTIONS_OR_MENU     = 0x0000_0100;
        const L1_OR_LB            = 0x0000_0200;
        const R1_OR_RB            = 0x0000_0400;
        const L2_OR_LT            = 0x0000_0800;
        const R2_OR_RT            = 0x0000_1000;
        const LEFT_STICK_CLICK    = 0x0000_2000;
        const RIGHT_STICK_CLICK   = 0x0000_4000;
        const RIGHT_STICK_LEFT    = 0x0000_8000;
        const RIGHT_STICK_RIGHT   = 0x0001_0000;
        const RIGHT_STICK_UP      = 0x0002_0000;
        const RIGHT_STICK_DOWN    = 0x0004_0000;
        const SPECIAL             = 0x0008_0000;
        const UDP_ACTION_1        = 0x0010_0000;
        const UDP_ACTION_2        = 0x0020_0000;
        const UDP_ACTION_3        = 0x0040_0000;
        const UDP_ACTION_4        = 0x0080_0000;
        const UDP_ACTION_5        = 0x0100_0000;
        const UDP_ACTION_6        = 0x0200_0000;
        const UDP_ACTION_7        = 0x0400_0000;
        const UDP_ACTION_8        = 0x0800_0000;
        const UDP_ACTION_9        = 0x1000_0000;
        const UDP_ACTION_10       = 0x2000_0000;
        const UDP_ACTION_11       = 0x4000_0000;
        const UDP_ACTION_12       = 0x8000_0000;
    }
}

bitflags! {
    /// Validity of a historical lap and its sectors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LapValidFlags: u8 {
        const LAP      = 0x01;
        const SECTOR_1 = 0x02;
        const SECTOR_2 = 0x04;
        const SECTOR_3 = 0x08;
    }
}
