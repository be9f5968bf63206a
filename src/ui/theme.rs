//! Role-keyed style helpers for consistent styling across pages.
//!
//! The demo logs in as a farmer (emerald accents); the trader palette is
//! kept so a stored trader session from the web build still looks right.

use crate::domain::UserRole;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-500",
        UserRole::Trader => "rounded-lg bg-sky-600 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-500",
    }
}

pub fn nav_active(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "rounded-lg bg-emerald-100 px-4 py-2 font-semibold text-emerald-800 border border-emerald-200",
        UserRole::Trader => "rounded-lg bg-sky-500/10 px-4 py-2 font-semibold text-sky-600 border border-sky-500/40",
    }
}

pub fn nav_inactive(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "rounded-lg border border-slate-200 px-4 py-2 text-slate-500 transition hover:border-emerald-300 hover:text-emerald-600",
        UserRole::Trader => "rounded-lg border border-slate-200 px-4 py-2 text-slate-500 transition hover:text-slate-900",
    }
}

pub fn quick_tool(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "flex flex-col items-center justify-center p-3 bg-white rounded-xl shadow-sm hover:shadow-md transition text-emerald-700",
        UserRole::Trader => "flex flex-col items-center justify-center p-3 bg-white rounded-xl shadow-sm hover:shadow-md transition text-sky-600",
    }
}

// ============================================
// INPUT / PANEL STYLES
// ============================================

pub fn input_class(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "mt-1 w-full rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm text-slate-900 focus:border-emerald-500 focus:outline-none",
        UserRole::Trader => "mt-1 w-full rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm text-slate-900 focus:border-sky-500 focus:outline-none",
    }
}

pub fn panel() -> &'static str {
    "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container() -> &'static str {
    "rounded-2xl border border-slate-200 bg-white shadow-sm overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-slate-200 bg-slate-50 text-xs uppercase tracking-wider text-slate-500"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn accent_text(role: UserRole) -> &'static str {
    match role {
        UserRole::Farmer => "text-emerald-600",
        UserRole::Trader => "text-sky-600",
    }
}
