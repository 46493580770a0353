use std::fmt;
use std::str::FromStr;

/// Hooks git looks up in the hooks directory, as listed in githooks(5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookName {
    ApplypatchMsg,
    PreApplypatch,
    PostApplypatch,
    PreCommit,
    PreMergeCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PreRebase,
    PostCheckout,
    PostMerge,
    PrePush,
    PreReceive,
    Update,
    ProcReceive,
    PostReceive,
    PostUpdate,
    ReferenceTransaction,
    PushToCheckout,
    PreAutoGc,
    PostRewrite,
    SendemailValidate,
    FsmonitorWatchman,
    P4Changelist,
    P4PrepareChangelist,
    P4PostChangelist,
    P4PreSubmit,
    PostIndexChange,
}

impl HookName {
    pub const ALL: [HookName; 28] = [
        HookName::ApplypatchMsg,
        HookName::PreApplypatch,
        HookName::PostApplypatch,
        HookName::PreCommit,
        HookName::PreMergeCommit,
        HookName::PrepareCommitMsg,
        HookName::CommitMsg,
        HookName::PostCommit,
        HookName::PreRebase,
        HookName::PostCheckout,
        HookName::PostMerge,
        HookName::PrePush,
        HookName::PreReceive,
        HookName::Update,
        HookName::ProcReceive,
        HookName::PostReceive,
        HookName::PostUpdate,
        HookName::ReferenceTransaction,
        HookName::PushToCheckout,
        HookName::PreAutoGc,
        HookName::PostRewrite,
        HookName::SendemailValidate,
        HookName::FsmonitorWatchman,
        HookName::P4Changelist,
        HookName::P4PrepareChangelist,
        HookName::P4PostChangelist,
        HookName::P4PreSubmit,
        HookName::PostIndexChange,
    ];

    /// File name git expects for this hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::ApplypatchMsg => "applypatch-msg",
            HookName::PreApplypatch => "pre-applypatch",
            HookName::PostApplypatch => "post-applypatch",
            HookName::PreCommit => "pre-commit",
            HookName::PreMergeCommit => "pre-merge-commit",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
            HookName::CommitMsg => "commit-msg",
            HookName::PostCommit => "post-commit",
            HookName::PreRebase => "pre-rebase",
            HookName::PostCheckout => "post-checkout",
            HookName::PostMerge => "post-merge",
            HookName::PrePush => "pre-push",
            HookName::PreReceive => "pre-receive",
            HookName::Update => "update",
            HookName::ProcReceive => "proc-receive",
            HookName::PostReceive => "post-receive",
            HookName::PostUpdate => "post-update",
            HookName::ReferenceTransaction => "reference-transaction",
            HookName::PushToCheckout => "push-to-checkout",
            HookName::PreAutoGc => "pre-auto-gc",
            HookName::PostRewrite => "post-rewrite",
            HookName::SendemailValidate => "sendemail-validate",
            HookName::FsmonitorWatchman => "fsmonitor-watchman",
            HookName::P4Changelist => "p4-changelist",
            HookName::P4PrepareChangelist => "p4-prepare-changelist",
            HookName::P4PostChangelist => "p4-post-changelist",
            HookName::P4PreSubmit => "p4-pre-submit",
            HookName::PostIndexChange => "post-index-change",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHookName(pub String);

impl FromStr for HookName {
    type Err = UnknownHookName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .iter()
            .copied()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| UnknownHookName(s.to_string()))
    }
}
