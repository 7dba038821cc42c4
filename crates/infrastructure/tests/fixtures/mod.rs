#![allow(dead_code)]

/// The sample zone shipped with the `run` command help.
pub const MATT_LOCAL_ZONE: &str = r#"
$ORIGIN matt.local.     ; designates the start of this zone file in the namespace
$TTL 3600                ; default expiration time (in seconds) of all RRs without their own TTL value
matt.local.  IN  SOA   ns.matt.local. username.matt.local. ( 2020091025 7200 3600 1209600 3600 )
matt.local.  IN  NS    ns
matt.local.  IN  A     127.0.0.1
ns            IN  A     127.0.0.1
workers            IN  A     12.0.0.2
workers            IN  A     12.0.0.3
"#;

pub const NO_SOA_ZONE: &str = r#"
$ORIGIN nosoa.local.
$TTL 300
@        IN  NS    ns
ns       IN  A     10.0.0.1
www      IN  A     10.0.0.2
"#;

pub const BROKEN_ZONE: &str = r#"
$ORIGIN broken.local.
$TTL 300
@        IN  SOA   ns admin ( 1 7200 3600 1209600 3600 )
www      IN  A     not-an-address
"#;

pub const MULTI_TYPE_ZONE: &str = r#"
$ORIGIN lab.test.
$TTL 600
@        IN  SOA    ns1 hostmaster ( 7 7200 3600 1209600 300 )
@        IN  NS     ns1
@        IN  NS     ns2
ns1      IN  A      10.9.0.1
ns2      IN  A      10.9.0.2
app      IN  A      10.9.1.10
app      IN  AAAA   fd00::10
alias    IN  CNAME  app
@        IN  TXT    "v=lab1"
"#;

pub const TWO_SOA_ZONE: &str = r#"
$ORIGIN matt.local.
$TTL 3600
@        IN  SOA   ns1 admin ( 1 7200 3600 1209600 3600 )
@        IN  SOA   ns2 admin ( 5 7200 3600 1209600 3600 )
@        IN  A     127.0.0.1
"#;

pub const DUPLICATES_ZONE: &str = r#"
$ORIGIN matt.local.
$TTL 3600
@        IN  SOA   ns admin ( 1 7200 3600 1209600 3600 )
w        IN  A     12.0.0.2
w        IN  A     12.0.0.2
w     60 IN  A     12.0.0.3
c        IN  CNAME a
c        IN  CNAME b
"#;

pub const INTERLEAVED_ZONE: &str = r#"
$ORIGIN matt.local.
$TTL 3600
zeta     IN  TXT   "z"
@        IN  SOA   ns admin ( 1 7200 3600 1209600 3600 )
alpha    IN  TXT   "a"
zeta     IN  A     10.0.0.26
alpha    IN  A     10.0.0.1
"#;

/// No `$ORIGIN`; every name is absolute.
pub const ABSOLUTE_NAMES_ZONE: &str = r#"
$TTL 3600
matt.local. IN SOA ns.matt.local. username.matt.local. 2020091025 7200 3600 1209600 3600
matt.local. IN A 127.0.0.1
workers.matt.local. IN A 12.0.0.2
"#;
