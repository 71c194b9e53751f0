//! Fixed text shared by every generated page.

pub const COMMON_AUTHORS: &[&str] = &[
    "Ned Ludd <solar@gentoo.org>",
    "Mike Frysinger <vapier@gentoo.org>",
];

pub const MANUAL_SOURCE: &str = "Gentoo Foundation";

pub const BUG_REPORT_URL: &str = "http://bugs.gentoo.org/";

pub const BUG_REPORT_PRODUCT: &str = "Product: Portage Development; Component: Tools";

pub const SUB_APPLETS_HEADING: &str = "This applet also has sub applets:";
