//! Technology brand colours for project cards and tech pills

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB colour, serialized as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid colour {s:?}")))
    }
}

/// Fallback for technologies with no table entry
pub const DEFAULT_TECH_COLOR: Rgb = Rgb::new(0x63, 0x66, 0xf1);

/// Ordered lookup table. Matching is by substring and the first key
/// contained in the name wins, so "PostgreSQL" resolves via "SQL".
const TECH_COLORS: &[(&str, u32)] = &[
    ("React", 0x3b82f6),
    ("Python", 0xeab308),
    ("AWS", 0xf97316),
    ("Node", 0x10b981),
    ("MongoDB", 0x10b981),
    ("JavaScript", 0xf59e0b),
    ("CSS", 0x06b6d4),
    ("HTML", 0xef4444),
    ("Firebase", 0xfbbf24),
    ("Tailwind", 0x06b6d4),
    ("Docker", 0x2496ed),
    ("SQL", 0x3b82f6),
    ("C++", 0x00599c),
    ("Java", 0xf89820),
    ("Git", 0xf05032),
    ("Redux", 0x764abc),
    ("Express", 0x000000),
    ("Socket", 0x010101),
    ("JWT", 0x000000),
    ("Chart", 0xff6384),
    ("PyTorch", 0xee4c2c),
    ("TensorFlow", 0xff6f00),
    ("OpenCV", 0x5c3ee8),
    ("Pandas", 0x150458),
    ("NumPy", 0x013243),
    ("Matplotlib", 0x11557c),
    ("Power", 0xf2c811),
    ("Excel", 0x217346),
    ("Seaborn", 0x3b82f6),
    ("LangChain", 0x1c3c6c),
    ("RAG", 0x6366f1),
    ("LLMs", 0x8b5cf6),
    ("XAI", 0xec4899),
    ("RLHF", 0x14b8a6),
    ("SHAP", 0x6366f1),
    ("LIME", 0x84cc16),
    ("MERN", 0x10b981),
    ("Next", 0x000000),
    ("GCP", 0x4285f4),
    ("Lambda", 0xff9900),
    ("SageMaker", 0xff9900),
    ("n8n", 0xff6d5a),
    ("Postman", 0xff6c37),
    ("Vercel", 0x000000),
    ("OpenSearch", 0x005571),
    ("Pinecone", 0xee4c2c),
    ("Google", 0x4285f4),
    ("ADK", 0x4285f4),
    ("Webhook", 0x6366f1),
    ("Gmail", 0xea4335),
    ("Supabase", 0x3ecf8e),
    ("PostgreSQL", 0x336791),
    ("Groq", 0x00d4aa),
    ("Llama", 0xf59e0b),
    ("Framer", 0x0055ff),
    ("Motion", 0x0055ff),
    ("Vite", 0x646cff),
    ("Twilio", 0xf22f46),
    ("WhatsApp", 0x25d366),
    ("Connect", 0xff9900),
    ("Lex", 0xff9900),
    ("Bedrock", 0xff9900),
    ("Titan", 0xff9900),
    ("Claude", 0xff9900),
    ("DynamoDB", 0x4053d3),
    ("S3", 0x569a31),
    ("API", 0x6366f1),
    ("Gemini", 0x4285f4),
    ("Auth", 0xf59e0b),
    ("Firestore", 0xffca28),
    ("Toolkit", 0x764abc),
    ("Keras", 0xd00000),
    ("ViT", 0x8b5cf6),
    ("CNN", 0x3b82f6),
    ("PEFT", 0x10b981),
    ("Transformers", 0xff9900),
    ("XGBoost", 0x017143),
    ("LightGBM", 0x6366f1),
    ("Time-LLM", 0x8b5cf6),
    ("FinBERT", 0xf59e0b),
    ("VMD", 0xef4444),
];

const fn unpack(rgb: u32) -> Rgb {
    Rgb::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Brand colour for a technology name (case-insensitive substring match)
pub fn tech_color(tech: &str) -> Rgb {
    let tech = tech.to_lowercase();
    TECH_COLORS
        .iter()
        .find(|(key, _)| tech.contains(&key.to_lowercase()))
        .map(|&(_, rgb)| unpack(rgb))
        .unwrap_or(DEFAULT_TECH_COLOR)
}

/// Three-stop hover gradient for a project card: the first three tags,
/// with "React" and "Python" standing in for missing second and third tags.
pub fn card_gradient<S: AsRef<str>>(tech_stack: &[S]) -> [Rgb; 3] {
    let tag = |i: usize, fallback: &str| {
        tech_stack
            .get(i)
            .map(|t| tech_color(t.as_ref()))
            .unwrap_or_else(|| tech_color(fallback))
    };
    [tag(0, ""), tag(1, "React"), tag(2, "Python")]
}
