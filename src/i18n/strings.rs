/// All localized user-facing strings for a locale
///
/// Strings are stored in their raw, unescaped form. When embedding in HTML
/// or XML output, escape them at the rendering site.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Home Page ====================
    /// Site title shown on the home page and in the browser tab
    pub home_title: &'static str,

    /// Tagline shown under the site title
    pub home_subtitle: &'static str,

    /// Placeholder text for the hero search input
    pub search_placeholder: &'static str,

    /// Label for the hero search button
    pub search_button: &'static str,

    /// Heading for the featured guides section
    pub featured_heading: &'static str,

    /// Call-to-action label on a guide card
    pub view_guide: &'static str,

    /// Heading for the recent updates section
    pub recent_heading: &'static str,

    /// Link label to the full guide listing
    pub view_all: &'static str,

    // ==================== Category Labels ====================
    /// Anomaly walkthrough category
    pub category_anomalies: &'static str,

    /// Redeem-code category
    pub category_codes: &'static str,

    /// Tier list category
    pub category_tiers: &'static str,

    /// Bug fix / troubleshooting category
    pub category_fixes: &'static str,

    // ==================== Article Pages ====================
    /// Suffix appended to article page titles (e.g., "Quick Guide")
    pub quick_guide: &'static str,

    /// Message shown when a guide does not exist in any locale
    pub not_found: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_games: &'static str,
    pub nav_codes: &'static str,
    pub nav_guides: &'static str,
    pub nav_settings: &'static str,

    /// Label for the collapsed floating menu button
    pub nav_menu: &'static str,

    /// Label for the expanded floating menu button
    pub nav_close: &'static str,

    // ==================== Language Toggle ====================
    /// Accessible label on the language switcher button
    pub switch_language: &'static str,

    /// Heading inside the language picker
    pub select_language: &'static str,

    // ==================== Footer ====================
    /// Short site description in the footer
    pub footer_description: &'static str,

    /// Rights line after the copyright year
    pub footer_rights: &'static str,

    /// Trademark disclaimer line
    pub footer_disclaimer: &'static str,
}

// ==================== English Strings ====================

/// English strings (default locale)
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    // Home page
    home_title: "RobloxHub - Game Guides & Walkthroughs",
    home_subtitle: "Guides, codes, and tier lists for the Roblox games everyone is playing",
    search_placeholder: "Search for a game guide...",
    search_button: "Search",
    featured_heading: "Featured Guides",
    view_guide: "View Guide",
    recent_heading: "Recent Updates",
    view_all: "View All",

    // Categories
    category_anomalies: "Anomalies",
    category_codes: "Codes",
    category_tiers: "Tier Lists",
    category_fixes: "Fixes",

    // Article pages
    quick_guide: "Quick Guide",
    not_found: "Guide not found.",

    // Navigation
    nav_home: "Home",
    nav_games: "Games",
    nav_codes: "Codes",
    nav_guides: "Guides",
    nav_settings: "Settings",
    nav_menu: "Menu",
    nav_close: "Close",

    // Language toggle
    switch_language: "Switch language",
    select_language: "Select language",

    // Footer
    footer_description: "Community-written guides, codes, and walkthroughs for popular Roblox games.",
    footer_rights: "All rights reserved.",
    footer_disclaimer: "RobloxHub is not affiliated with Roblox Corporation.",
};

// ==================== Chinese Strings ====================

/// Chinese strings
pub const CHINESE_STRINGS: UiStrings = UiStrings {
    // Home page
    home_title: "RobloxHub - 游戏攻略与指南",
    home_subtitle: "热门 Roblox 游戏的攻略、兑换码和强度榜",
    search_placeholder: "搜索游戏攻略...",
    search_button: "搜索",
    featured_heading: "精选攻略",
    view_guide: "查看攻略",
    recent_heading: "最近更新",
    view_all: "查看全部",

    // Categories
    category_anomalies: "异常图鉴",
    category_codes: "兑换码",
    category_tiers: "强度榜",
    category_fixes: "问题修复",

    // Article pages
    quick_guide: "快速攻略",
    not_found: "未找到该攻略。",

    // Navigation
    nav_home: "首页",
    nav_games: "游戏",
    nav_codes: "兑换码",
    nav_guides: "攻略",
    nav_settings: "设置",
    nav_menu: "菜单",
    nav_close: "关闭",

    // Language toggle
    switch_language: "切换语言",
    select_language: "选择语言",

    // Footer
    footer_description: "热门 Roblox 游戏的社区攻略、兑换码与通关指南。",
    footer_rights: "版权所有。",
    footer_disclaimer: "RobloxHub 与 Roblox Corporation 没有任何关联。",
};

// ==================== Spanish Strings ====================

/// Spanish strings
pub const SPANISH_STRINGS: UiStrings = UiStrings {
    // Home page
    home_title: "RobloxHub - Guías y Tutoriales de Juegos",
    home_subtitle: "Guías, códigos y listas de niveles para los juegos de Roblox más populares",
    search_placeholder: "Busca una guía de juego...",
    search_button: "Buscar",
    featured_heading: "Guías Destacadas",
    view_guide: "Ver Guía",
    recent_heading: "Actualizaciones Recientes",
    view_all: "Ver Todo",

    // Categories
    category_anomalies: "Anomalías",
    category_codes: "Códigos",
    category_tiers: "Listas de Niveles",
    category_fixes: "Soluciones",

    // Article pages
    quick_guide: "Guía Rápida",
    not_found: "Guía no encontrada.",

    // Navigation
    nav_home: "Inicio",
    nav_games: "Juegos",
    nav_codes: "Códigos",
    nav_guides: "Guías",
    nav_settings: "Ajustes",
    nav_menu: "Menú",
    nav_close: "Cerrar",

    // Language toggle
    switch_language: "Cambiar idioma",
    select_language: "Seleccionar idioma",

    // Footer
    footer_description: "Guías comunitarias, códigos y tutoriales para los juegos más populares de Roblox.",
    footer_rights: "Todos los derechos reservados.",
    footer_disclaimer: "RobloxHub no está afiliado a Roblox Corporation.",
};
