//! Built-in detection rule table.
//!
//! Each entry pairs a stable rule id with a regex source and a category.
//! Patterns use search semantics against the whole command string, are
//! case-sensitive, and are intentionally broad (word-boundary matches on
//! command names rather than argument parsing): a missed destructive
//! command costs far more than over-flagging a benign one.

/// Grouping of detection rules by the kind of damage they guard against.
///
/// Categories are informational. They never influence the flag decision,
/// but give the warning output and the test suite a way to organize rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    DestructiveFilesystem,
    DiskLevelIo,
    PrivilegeEscalation,
    RemoteCodeExecution,
    ProcessTermination,
    ObfuscatedExecution,
    KernelControl,
}

impl RuleCategory {
    /// Short rationale shown next to safety warnings.
    pub fn description(&self) -> &'static str {
        match self {
            RuleCategory::DestructiveFilesystem => "irreversible file or permission changes",
            RuleCategory::DiskLevelIo => "raw disk access that bypasses the filesystem",
            RuleCategory::PrivilegeEscalation => "elevated privileges amplify any mistake",
            RuleCategory::RemoteCodeExecution => "executes unreviewed remote code",
            RuleCategory::ProcessTermination => "can corrupt state of running processes",
            RuleCategory::ObfuscatedExecution => "hides the real action from a quick read",
            RuleCategory::KernelControl => "can destabilize the running kernel",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleCategory::DestructiveFilesystem => "destructive-filesystem",
            RuleCategory::DiskLevelIo => "disk-level-io",
            RuleCategory::PrivilegeEscalation => "privilege-escalation",
            RuleCategory::RemoteCodeExecution => "remote-code-execution",
            RuleCategory::ProcessTermination => "process-termination",
            RuleCategory::ObfuscatedExecution => "obfuscated-execution",
            RuleCategory::KernelControl => "kernel-control",
        };
        write!(f, "{name}")
    }
}

/// Source form of a rule before pattern compilation.
pub(crate) struct RuleDef {
    pub id: &'static str,
    pub pattern: &'static str,
    pub category: RuleCategory,
}

/// The full rule table, in the fixed order used for diagnostics output.
///
/// Order does not affect the flag decision (matches are OR-combined) but
/// keeps matched-rule listings deterministic.
pub(crate) const BUILTIN_RULES: &[RuleDef] = &[
    // Destructive filesystem operations
    RuleDef {
        id: "recursive-force-delete",
        // rm with -r and/or -f in any combination or order, incl. -fr
        pattern: r"\brm\s+(-[a-zA-Z]*r|-[a-zA-Z]*f)",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "secure-delete",
        pattern: r"\bshred\b",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "recursive-chmod",
        pattern: r"\bchmod\b.*(777|-R)",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "recursive-chown",
        pattern: r"\bchown\b.*-R",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "move-to-null-device",
        pattern: r"\bmv\b.*\s/dev/null",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "move-into-etc",
        pattern: r"\bmv\s+.*\s+/etc",
        category: RuleCategory::DestructiveFilesystem,
    },
    RuleDef {
        id: "move-into-boot",
        pattern: r"\bmv\s+.*\s+/boot",
        category: RuleCategory::DestructiveFilesystem,
    },
    // Disk-level I/O
    RuleDef {
        id: "raw-disk-copy",
        pattern: r"\bdd\b",
        category: RuleCategory::DiskLevelIo,
    },
    RuleDef {
        id: "filesystem-create",
        pattern: r"\bmkfs\b",
        category: RuleCategory::DiskLevelIo,
    },
    RuleDef {
        id: "partition-editor-fdisk",
        pattern: r"\bfdisk\b",
        category: RuleCategory::DiskLevelIo,
    },
    RuleDef {
        id: "partition-editor-gdisk",
        pattern: r"\bgdisk\b",
        category: RuleCategory::DiskLevelIo,
    },
    RuleDef {
        id: "partition-editor-parted",
        pattern: r"\bparted\b",
        category: RuleCategory::DiskLevelIo,
    },
    RuleDef {
        id: "redirect-to-disk-device",
        pattern: r">[ \t]*/dev/sd[a-z]",
        category: RuleCategory::DiskLevelIo,
    },
    // Privilege escalation
    RuleDef {
        id: "sudo-prefix",
        pattern: r"\bsudo\b",
        category: RuleCategory::PrivilegeEscalation,
    },
    // Remote code execution
    RuleDef {
        id: "wget-pipe-shell",
        pattern: r"\bwget\b.*\|\s*(sh|bash)\b",
        category: RuleCategory::RemoteCodeExecution,
    },
    RuleDef {
        id: "curl-pipe-shell",
        pattern: r"\bcurl\b.*\|\s*(sh|bash)\b",
        category: RuleCategory::RemoteCodeExecution,
    },
    RuleDef {
        id: "reverse-shell-tcp",
        pattern: r"\bbash\s*<\s*/dev/tcp/",
        category: RuleCategory::RemoteCodeExecution,
    },
    RuleDef {
        id: "netcat",
        pattern: r"\bnc\b|\bnetcat\b",
        category: RuleCategory::RemoteCodeExecution,
    },
    // Process termination
    RuleDef {
        id: "kill-sigkill",
        pattern: r"\bkill\s+-9\b",
        category: RuleCategory::ProcessTermination,
    },
    RuleDef {
        id: "pkill-sigkill",
        pattern: r"\bpkill\s+-9\b",
        category: RuleCategory::ProcessTermination,
    },
    // Obfuscated or hidden execution
    RuleDef {
        id: "base64-decode-pipe",
        pattern: r"\bbase64\s+(--decode|-d)\b.*\|",
        category: RuleCategory::ObfuscatedExecution,
    },
    RuleDef {
        id: "eval-execution",
        pattern: r"\beval\b",
        category: RuleCategory::ObfuscatedExecution,
    },
    RuleDef {
        id: "command-substitution",
        pattern: r"\$\(.*\)",
        category: RuleCategory::ObfuscatedExecution,
    },
    // Kernel and system control
    RuleDef {
        id: "sysctl-write",
        pattern: r"\bsysctl\s+-w\b",
        category: RuleCategory::KernelControl,
    },
    RuleDef {
        id: "proc-sys-write",
        pattern: r">\s*/proc/sys/",
        category: RuleCategory::KernelControl,
    },
];
