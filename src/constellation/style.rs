/// Broad skill family, used to pick a badge colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Frontend,
    Backend,
    Data,
    Cloud,
    Systems,
    Other,
}

// Checked in order; the first family with a matching keyword wins.
const FAMILIES: [(SkillKind, &[&str]); 5] = [
    (
        SkillKind::Frontend,
        &["react", "next", "javascript", "typescript", "flutter", "dart"],
    ),
    (
        SkillKind::Backend,
        &[
            "node", "express", "nest", "python", "go", "golang", "rust", "java", "kotlin", "php",
            "spring",
        ],
    ),
    (SkillKind::Data, &["mongo", "postgre", "kafka"]),
    (
        SkillKind::Cloud,
        &["aws", "gcp", "docker", "kubernetes", "linux", "git"],
    ),
    (
        SkillKind::Systems,
        &["solidity", "ipfs", "ethereum", "zksync", "c++", "c"],
    ),
];

/// Keywords this short only count as whole words, so "Go" does not claim
/// "MongoDB" and "C" does not claim every label containing the letter.
const WHOLE_WORD_MAX_LEN: usize = 2;

impl SkillKind {
    pub fn classify(label: &str) -> Self {
        let lowered = label.to_lowercase();
        FAMILIES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| matches(&lowered, keyword)))
            .map(|(kind, _)| *kind)
            .unwrap_or(SkillKind::Other)
    }

    pub fn name(self) -> &'static str {
        match self {
            SkillKind::Frontend => "Frontend",
            SkillKind::Backend => "Backend",
            SkillKind::Data => "Data",
            SkillKind::Cloud => "Cloud & DevOps",
            SkillKind::Systems => "Systems & Web3",
            SkillKind::Other => "Other",
        }
    }
}

fn matches(lowered: &str, keyword: &str) -> bool {
    if keyword.len() > WHOLE_WORD_MAX_LEN {
        return lowered.contains(keyword);
    }

    lowered
        .split(|ch: char| !(ch.is_alphanumeric() || ch == '+' || ch == '#'))
        .any(|word| word == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword_family() {
        assert_eq!(SkillKind::classify("React.js"), SkillKind::Frontend);
        assert_eq!(SkillKind::classify("Node.js"), SkillKind::Backend);
        assert_eq!(SkillKind::classify("PostgreSQL"), SkillKind::Data);
        assert_eq!(SkillKind::classify("Docker"), SkillKind::Cloud);
        assert_eq!(SkillKind::classify("Solidity"), SkillKind::Systems);
        assert_eq!(SkillKind::classify("Figma"), SkillKind::Other);
    }

    #[test]
    fn earlier_family_wins() {
        assert_eq!(SkillKind::classify("Next.js on Docker"), SkillKind::Frontend);
        assert_eq!(SkillKind::classify("GitHub Actions"), SkillKind::Cloud);
    }

    #[test]
    fn short_keywords_need_whole_words() {
        assert_eq!(SkillKind::classify("MongoDB"), SkillKind::Data);
        assert_eq!(SkillKind::classify("Go"), SkillKind::Backend);
        assert_eq!(SkillKind::classify("C"), SkillKind::Systems);
        assert_eq!(SkillKind::classify("C++"), SkillKind::Systems);
        assert_eq!(SkillKind::classify("Machine Learning"), SkillKind::Other);
    }
}
