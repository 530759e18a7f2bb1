//! Per-language string tables for the UI.
//!
//! Every user-visible label lives here so the two tables stay in sync;
//! rendering code never embeds literal text.

use r2s_types::{Lang, ScanMode, Verdict};

pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,

    // Screen tabs
    pub tab_scan: &'static str,
    pub tab_result: &'static str,
    pub tab_about: &'static str,

    // Form
    pub host_label: &'static str,
    pub host_placeholder: &'static str,
    pub mode_label: &'static str,
    pub paths_label: &'static str,
    pub paths_placeholder: &'static str,
    pub waf_label: &'static str,
    pub windows_label: &'static str,
    pub host_required: &'static str,
    pub start_hint: &'static str,
    pub scanning: &'static str,

    // Result
    pub no_result: &'static str,
    pub error_title: &'static str,
    pub row_host: &'static str,
    pub row_status: &'static str,
    pub row_tested: &'static str,
    pub row_redirect: &'static str,
    pub row_detail: &'static str,
    pub row_time: &'static str,
    pub new_scan_hint: &'static str,

    // Verdict badges
    pub verdict_vulnerable: &'static str,
    pub verdict_safe: &'static str,
    pub verdict_unknown: &'static str,

    // Mode names and one-line descriptions shown on the cycle selector
    pub mode_rce: &'static str,
    pub mode_safe: &'static str,
    pub mode_vercel: &'static str,
    pub mode_rce_desc: &'static str,
    pub mode_safe_desc: &'static str,
    pub mode_vercel_desc: &'static str,

    pub about: &'static [&'static str],
}

impl Strings {
    pub fn mode_name(&self, mode: ScanMode) -> &'static str {
        match mode {
            ScanMode::Rce => self.mode_rce,
            ScanMode::Safe => self.mode_safe,
            ScanMode::VercelBypass => self.mode_vercel,
        }
    }

    pub fn mode_desc(&self, mode: ScanMode) -> &'static str {
        match mode {
            ScanMode::Rce => self.mode_rce_desc,
            ScanMode::Safe => self.mode_safe_desc,
            ScanMode::VercelBypass => self.mode_vercel_desc,
        }
    }

    pub fn verdict_badge(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Vulnerable => self.verdict_vulnerable,
            Verdict::NotVulnerable => self.verdict_safe,
            Verdict::Indeterminate => self.verdict_unknown,
        }
    }
}

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::Zh => &ZH,
    }
}

static EN: Strings = Strings {
    title: "React2Shell Scanner",
    subtitle: "CVE-2025-55182 / CVE-2025-66478 detection",

    tab_scan: "Scan",
    tab_result: "Result",
    tab_about: "About",

    host_label: "Target Host: ",
    host_placeholder: "example.com or https://example.com",
    mode_label: "Scan Mode:   ",
    paths_label: "Paths:       ",
    paths_placeholder: "/ (comma-separated)",
    waf_label: "WAF Bypass (128KB junk):      ",
    windows_label: "Windows Target (PowerShell): ",
    host_required: "Target host is required",
    start_hint: "Enter: start scan  Tab: navigate  Space: toggle  \u{2190}\u{2192}: cycle",
    scanning: "Scanning...",

    no_result: "No scan yet. Press F1, enter a target, then Enter to scan.",
    error_title: "Scan Error",
    row_host: "Host",
    row_status: "Status Code",
    row_tested: "Tested URL",
    row_redirect: "Redirected To",
    row_detail: "Detail",
    row_time: "Time",
    new_scan_hint: "Press F1 for a new scan",

    verdict_vulnerable: " VULNERABLE ",
    verdict_safe: " NOT VULNERABLE ",
    verdict_unknown: " INCONCLUSIVE ",

    mode_rce: "RCE Detection",
    mode_safe: "Safe Check",
    mode_vercel: "Vercel WAF Bypass",
    mode_rce_desc: "evaluates 41*271 on the target, checks for 11111",
    mode_safe_desc: "fingerprints the vulnerable path, executes nothing",
    mode_vercel_desc: "re-encodes the probe to pass Vercel's WAF",

    about: &[
        "",
        "  React2Shell checks a target for CVE-2025-55182, a deserialization",
        "  flaw in React Server Components that allows remote code execution,",
        "  and CVE-2025-66478, the equivalent flaw in Next.js server actions.",
        "",
        "  RCE Detection submits the expression 41*271 to the vulnerable",
        "  endpoint and looks for the marker 11111 in the response, proving",
        "  code execution without side effects. Safe Check only fingerprints",
        "  the vulnerable code path and never executes anything. Vercel WAF",
        "  Bypass re-encodes the probe to get past Vercel's managed ruleset.",
        "",
        "  WAF Bypass padding prepends 128KB of junk to the request body to",
        "  slip under inspection size limits; it raises the scan timeout from",
        "  10 to 20 seconds. The Windows toggle switches the probe payload to",
        "  its PowerShell variant.",
        "",
        "  Vulnerability research credit: Assetnote.",
        "",
        "  Only scan systems you are authorized to test.",
        "",
    ],
};

static ZH: Strings = Strings {
    title: "React2Shell 扫描器",
    subtitle: "CVE-2025-55182 / CVE-2025-66478 检测",

    tab_scan: "扫描",
    tab_result: "结果",
    tab_about: "关于",

    host_label: "目标主机：   ",
    host_placeholder: "example.com 或 https://example.com",
    mode_label: "扫描模式：   ",
    paths_label: "路径：       ",
    paths_placeholder: "/（逗号分隔）",
    waf_label: "WAF 绕过（128KB 垃圾数据）： ",
    windows_label: "Windows 目标（PowerShell）：",
    host_required: "请输入目标主机",
    start_hint: "Enter：开始扫描  Tab：切换字段  Space：开关  \u{2190}\u{2192}：选择",
    scanning: "扫描中...",

    no_result: "尚未扫描。按 F1 输入目标后回车开始。",
    error_title: "扫描错误",
    row_host: "主机",
    row_status: "状态码",
    row_tested: "测试 URL",
    row_redirect: "重定向至",
    row_detail: "详情",
    row_time: "时间",
    new_scan_hint: "按 F1 开始新的扫描",

    verdict_vulnerable: " 存在漏洞 ",
    verdict_safe: " 不存在漏洞 ",
    verdict_unknown: " 无法确定 ",

    mode_rce: "RCE 检测",
    mode_safe: "安全检测",
    mode_vercel: "Vercel WAF 绕过",
    mode_rce_desc: "在目标上求值 41*271，检查响应中的 11111",
    mode_safe_desc: "仅识别漏洞代码路径，不执行任何代码",
    mode_vercel_desc: "对探测请求重新编码以绕过 Vercel WAF",

    about: &[
        "",
        "  React2Shell 用于检测 CVE-2025-55182（React Server Components",
        "  反序列化漏洞，可导致远程代码执行）以及 CVE-2025-66478",
        "  （Next.js server actions 中的同类漏洞）。",
        "",
        "  RCE 检测向漏洞端点提交表达式 41*271，并在响应中查找 11111",
        "  标记，以无副作用的方式证明代码执行。安全检测只识别存在漏洞的",
        "  代码路径，不执行任何代码。Vercel WAF 绕过会对探测请求重新编码，",
        "  以绕过 Vercel 的托管规则集。",
        "",
        "  WAF 绕过会在请求体前填充 128KB 垃圾数据以规避大小检查，",
        "  同时将扫描超时从 10 秒提高到 20 秒。Windows 开关会把探测载荷",
        "  切换为 PowerShell 变体。",
        "",
        "  漏洞研究致谢：Assetnote。",
        "",
        "  仅可扫描获得授权测试的系统。",
        "",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tables_resolve() {
        assert_eq!(strings(Lang::En).title, "React2Shell Scanner");
        assert_eq!(strings(Lang::Zh).title, "React2Shell 扫描器");
    }

    #[test]
    fn mode_names_cover_all_modes() {
        for lang in Lang::ALL {
            for mode in ScanMode::ALL {
                assert!(!strings(lang).mode_name(mode).is_empty());
            }
        }
    }

    #[test]
    fn verdict_badges_cover_all_verdicts() {
        for verdict in [
            Verdict::Vulnerable,
            Verdict::NotVulnerable,
            Verdict::Indeterminate,
        ] {
            assert!(!strings(Lang::En).verdict_badge(verdict).trim().is_empty());
            assert!(!strings(Lang::Zh).verdict_badge(verdict).trim().is_empty());
        }
    }
}
