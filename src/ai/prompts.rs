//! Instructional preamble for the repository evaluator

use crate::summary::RepositorySummary;

/// Category keys the preamble asks for, in presentation order.
pub const CATEGORY_NAMES: &[&str] = &[
    "code_quality",
    "documentation",
    "configuration",
    "commit_hygiene",
    "size_hygiene",
    "test_coverage",
];

pub const SYSTEM_PROMPT: &str = "You are a meticulous senior engineer who reviews open-source \
repositories. You give professional, accurate and well-founded assessments and you always \
answer in the exact JSON format requested.";

/// Scoring instructions placed before every summary.
pub const PREAMBLE: &str = r#"
---
The information of a Git repository has been organised into the summary format below. Read the summary carefully, and inspect the style, logic and conventions of the code in the [Code Snapshot] section closely. Then, citing concrete examples, score the repository from 0 to 10 on each of six dimensions (bands below): code_quality, documentation, configuration, commit_hygiene, size_hygiene, test_coverage. Finish with a complete summary of strengths and concrete improvements.

### Summary format
```
[README]:
[LICENSE]:
[.gitignore]:
[Git Commit]:
[Code Snapshot]:
[Test Files]:
[Binary Files]:
[Repo Size]:
[Total Files]:
```

### Scoring dimensions

#### 1. code_quality (0-10)
- **0-3**: hard to read, confused logic, no comments, inconsistent naming and style, several serious latent bugs.
- **4-6**: average readability, some comments, some logic problems or irregular naming, mixed styles (e.g. camelCase and snake_case together), occasional latent bugs.
- **7-8**: clear overall, reasonably commented, rigorous logic, consistent naming, few latent bugs.
- **9-10**: well structured, consistently conventional, clear logic, accurate naming, almost no latent bugs.
- If the [Code Snapshot] section is empty there is no source code at all: code_quality is 0 and the reason is that the repository contains no source code.

#### 2. documentation (0-10)
- **0-3**: documentation missing (e.g. no README) or nearly empty (no usage instructions).
- **4-6**: incomplete documentation; users must look elsewhere for information.
- **7-8**: fairly complete; a few details need work.
- **9-10**: thorough; beyond the README there are BUILD, CONTRIBUTING, FAQ, troubleshooting or docs/ material and users get started easily.

#### 3. configuration (0-10)
- **0-3**: messy project configuration, required files (.gitignore, LICENSE) missing.
- **4-6**: some configuration files but insufficient, e.g. a .gitignore that does not ignore build outputs such as .pyc, .DS_Store, .out or .so.
- **7-8**: good configuration, required files present, common non-source files ignored.
- **9-10**: optimised configuration with all required files (.gitignore, LICENSE, setup.cfg, ...) following best practice; every non-source artefact and obsolete data directory is ignored.
- If the [LICENSE] section or the [.gitignore] section is empty there is no license or no ignore rules: configuration is 0.

#### 4. commit_hygiene (0-10)
- **0-3**: commit messages so terse their purpose is unclear (e.g. "update", "upload").
- **4-6**: messages describe something but are vague or incomplete.
- **7-8**: clear messages explaining what changed and why, with a consistent format such as Conventional Commits.
- **9-10**: detailed, accurate messages explaining every change and its context, with a body separated by a blank line.

#### 5. size_hygiene (0-10)
Compute [Repo Size] / [Total Files], the average size per file; smaller is better.
- **0-3**: average above 1M.
- **4-6**: average above 500K.
- **7-8**: average above 100K.
- **9-10**: average below 100K; below 30K scores 10.
- If the [Code Snapshot] section is empty but [Repo Size] exceeds 10M, size_hygiene is 0: no source code and a large size means the repository stores binaries rather than code.

#### 6. test_coverage (0-10)
- **0-3**: no unit or integration tests and no testing documentation.
- **4-6**: only default or mock test files, no tests of real code.
- **7-8**: some tests of real code but low coverage and no instructions for running them.
- **9-10**: test files in [Test Files] exceed 10% of [Total Files] (the higher the share, the higher the score) and running the tests is documented.
- If the [Test Files] section is empty there are no tests: test_coverage is 0.

Important: scores must discriminate. When [Test Files], [LICENSE], [.gitignore] or [Code Snapshot] is empty, give the corresponding dimension a decisive 0 so the result carries a warning. When something is done well, give a decisive 10 rather than a cautious 8 or 9.

### Response format

Return the result in exactly this JSON format:

```json
{
    "scores": {
        "code_quality": {"score": <0-10>, "reason": "<detailed reason citing the [Code Snapshot]; 0 if it is empty>"},
        "documentation": {"score": <0-10>, "reason": "<detailed reason with concrete examples>"},
        "configuration": {"score": <0-10>, "reason": "<0 if [LICENSE] or [.gitignore] is empty, otherwise a detailed reason>"},
        "commit_hygiene": {"score": <0-10>, "reason": "<detailed reason with concrete examples>"},
        "size_hygiene": {"score": <0-10>, "reason": "<detailed reason with concrete examples>"},
        "test_coverage": {"score": <0-10>, "reason": "<0 if [Test Files] is empty, otherwise analyse coverage in detail>"}
    },
    "advice": "<detailed, practical and comprehensive assessment and advice with concrete examples>"
}
```

An example response:
```json
{
    "scores": {
        "code_quality": {"score": 3, "reason": "Formatting is inconsistent, e.g. spacing around '=' varies; line 10 of main.cpp relies on undefined behaviour; there are no comments and the control flow is hard to follow."},
        "documentation": {"score": 10, "reason": "The README explains the features, installation, usage and common troubleshooting steps."},
        "configuration": {"score": 8, "reason": "Has .gitignore and LICENSE files and no temporary files are committed."},
        "commit_hygiene": {"score": 6, "reason": "Commit format is mostly consistent, but several commits just say 'update' and some messages are duplicated."},
        "size_hygiene": {"score": 0, "reason": "The repository exceeds 10G; the history contains large committed artefacts."},
        "test_coverage": {"score": 10, "reason": "Extensive pytest suites cover all of the sampled code."}
    },
    "advice": "Overall code quality is average. Conventions are good, but the repository is too large to download comfortably; clean the history and tighten commit messages."
}
```

Here is the summary: "#;

/// Preamble followed by the rendered summary.
pub fn build_prompt(summary: &RepositorySummary) -> String {
    format!("{}\n{}", PREAMBLE, summary.render())
}
