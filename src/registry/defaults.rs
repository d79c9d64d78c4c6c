// Fri Jan 16 2026 - Alex

use super::{Phase, ToolSpec};

pub fn builtin_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("assetfinder", "assetfinder --subs-only {domain}", 5, Phase::Fast),
        ToolSpec::new("subfinder", "subfinder -d {domain}", 7, Phase::Fast),
        ToolSpec::new("findomain", "findomain -t {domain} -u -", 5, Phase::Fast),
        ToolSpec::new("theHarvester", "theHarvester -d {domain} -b all", 10, Phase::Fast),
        ToolSpec::new("amass", "amass enum -passive -d {domain}", 15, Phase::Fast),
        ToolSpec::new("sublist3r", "python3 /usr/local/bin/sublist3r -d {domain}", 10, Phase::Fast),
        ToolSpec::new("dnsrecon", "dnsrecon -d {domain}", 25, Phase::Slow),
        ToolSpec::new("dnsenum", "dnsenum {domain}", 30, Phase::Slow),
        ToolSpec::new("fierce", "fierce --domain {domain}", 30, Phase::Slow),
        ToolSpec::new(
            "gobuster",
            "gobuster dns -d {domain} -w /usr/share/wordlists/dirb/common.txt -q",
            35,
            Phase::Slow,
        ),
        ToolSpec::new(
            "massdns",
            "massdns -r /etc/resolv.conf -t A -o S -w massdns.txt {domain}",
            40,
            Phase::Slow,
        ),
    ]
}
