use constcat::concat;

use bucketlist_common::theme::COMPACT_BREAKPOINT;

mod components;
mod motion;
mod pages;

pub use components::BASE_COMPONENTS;
pub use motion::MOTION_STYLES;
pub use pages::PAGE_STYLES;

// the token table is rendered separately (see theme::css_variables); everything below
// only refers to the custom properties it defines
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--stone-100);
  background-color: var(--forest);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}
"#,
    BASE_COMPONENTS,
    r#"
/* Page shell */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  background-color: var(--header-bg);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--amberwood-line);
}

.nav-container {
  max-width: 80rem;
  margin: 0 auto;
  padding: var(--space-4) var(--space-6);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.brand-mark {
  filter: drop-shadow(0 4px 3px rgba(0, 0, 0, 0.07));
}

.brand-name {
  font-weight: 800;
  font-size: 1.125rem;
  letter-spacing: 0.025em;
  color: var(--amberwood);
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  color: var(--stone-200);
  font-weight: 500;
  letter-spacing: 0.025em;
  transition: color var(--menu-duration) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--amberwood);
}

.cart-link {
  position: relative;
  color: var(--stone-300);
  transition: color var(--menu-duration) var(--easing-standard);
}

.cart-link:hover {
  color: var(--amberwood);
}

.cart-badge {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background-color: var(--amberwood);
  color: white;
  font-size: 0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.menu-toggle {
  display: inline-flex;
  background: none;
  border: none;
  color: var(--stone-100);
  cursor: pointer;
}

.menu-toggle:focus {
  outline: none;
}

.mobile-panel {
  background-color: var(--panel-bg);
  color: var(--stone-100);
  border-top: 1px solid var(--amberwood-soft);
}

.mobile-links {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-4) 0;
}

.mobile-link {
  font-size: 1.125rem;
  font-weight: 500;
  transition: color var(--menu-duration) var(--easing-standard);
}

.mobile-link:hover {
  color: var(--amberwood);
}

@media (min-width: "#,
    COMPACT_BREAKPOINT,
    r#") {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-panel {
    display: none;
  }
}

.page-content {
  padding-top: var(--header-height);
}

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  background-color: var(--bark);
  border-top: 1px solid var(--amberwood-line);
  text-align: center;
  font-size: 0.875rem;
  color: var(--stone-400);
}

.footer-inner {
  max-width: 56rem;
  margin: 0 auto;
  padding: 0 var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.newsletter-form {
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: var(--space-2);
}

.newsletter-form .form-input {
  width: 16rem;
}

@media (min-width: 640px) {
  .newsletter-form {
    flex-direction: row;
  }
}
"#,
    PAGE_STYLES,
    MOTION_STYLES,
);
