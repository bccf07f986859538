use crate::error::WaypostError;

/// Static configuration for one discovery topic: the query terms fanned out
/// against each site restriction, plus the phrase handed to the forum search.
#[derive(Debug, Clone, Copy)]
pub struct TopicEntry {
    pub queries: &'static [&'static str],
    pub sites: &'static [&'static str],
    pub forum_query: &'static str,
}

const AI: TopicEntry = TopicEntry {
    queries: &[
        "artificial intelligence",
        "machine learning",
        "ChatGPT",
        "AI research",
        "neural networks",
        "deep learning",
    ],
    sites: &[
        "techcrunch.com",
        "wired.com",
        "theverge.com",
        "arstechnica.com",
        "venturebeat.com",
    ],
    forum_query: "artificial intelligence",
};

const TECH: TopicEntry = TopicEntry {
    queries: &[
        "technology news",
        "latest tech",
        "science and innovation",
        "software development",
    ],
    sites: &["techcrunch.com", "wired.com", "theverge.com", "arstechnica.com"],
    forum_query: "technology",
};

const OPENSOURCE: TopicEntry = TopicEntry {
    queries: &[
        "open source",
        "developer tools",
        "GitHub",
        "software development",
        "programming",
    ],
    sites: &["techcrunch.com", "theverge.com", "arstechnica.com", "zdnet.com"],
    forum_query: "open source",
};

const SECURITY: TopicEntry = TopicEntry {
    queries: &[
        "cybersecurity",
        "security vulnerabilities",
        "data breaches",
        "infosec",
        "hacking",
    ],
    sites: &[
        "krebsonsecurity.com",
        "thehackernews.com",
        "bleepingcomputer.com",
        "threatpost.com",
    ],
    forum_query: "security",
};

const LINUX: TopicEntry = TopicEntry {
    queries: &["Linux", "open source", "Ubuntu", "server", "cloud computing"],
    sites: &["arstechnica.com", "zdnet.com", "theregister.com", "techcrunch.com"],
    forum_query: "linux",
};

/// Closed set of discovery topics. Lookup by identifier fails explicitly;
/// the HTTP boundary substitutes the default topic instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Ai,
    Tech,
    OpenSource,
    Security,
    Linux,
}

impl Topic {
    pub const ALL: &'static [Topic] = &[
        Topic::Ai,
        Topic::Tech,
        Topic::OpenSource,
        Topic::Security,
        Topic::Linux,
    ];

    pub fn entry(&self) -> &'static TopicEntry {
        match self {
            Topic::Ai => &AI,
            Topic::Tech => &TECH,
            Topic::OpenSource => &OPENSOURCE,
            Topic::Security => &SECURITY,
            Topic::Linux => &LINUX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Ai => "ai",
            Topic::Tech => "tech",
            Topic::OpenSource => "opensource",
            Topic::Security => "security",
            Topic::Linux => "linux",
        }
    }
}

impl Default for Topic {
    fn default() -> Self {
        Topic::Ai
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = WaypostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Topic::Ai),
            "tech" => Ok(Topic::Tech),
            "opensource" => Ok(Topic::OpenSource),
            "security" => Ok(Topic::Security),
            "linux" => Ok(Topic::Linux),
            other => Err(WaypostError::UnknownTopic(other.to_string())),
        }
    }
}
