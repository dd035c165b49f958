use constcat::concat;

mod components;
mod polish;
mod variables;

pub use components::BASE_COMPONENTS;
pub use polish::POLISHED_STYLES;
pub use variables::CSS_VARIABLES;

pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
  background-color: #F3F4F6;
}

body.dark {
  background-color: #111827;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Page shell */
.portfolio {
  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition-slow), color var(--transition-slow);
}

/* Navigation */
.app-header {
  position: fixed;
  width: 100%;
  z-index: 20;
  background-color: var(--nav-background);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-size: 1.5rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: var(--accent);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-10);
}

.nav-link {
  position: relative;
  padding: var(--space-2) 0;
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

.nav-indicator {
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 4px;
  border-radius: var(--radius-full);
  background: var(--accent);
}

.theme-toggle {
  display: inline-flex;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  cursor: pointer;
  transition: background-color var(--transition-slow);
}

.theme-toggle.sun {
  background: #FACC15;
  color: white;
}

.theme-toggle.moon {
  background: var(--neutral-800);
  color: #FDE047;
}

.mobile-controls {
  display: none;
  align-items: center;
  gap: var(--space-2);
}

.theme-switch {
  position: relative;
  display: inline-block;
  width: 48px;
  height: 24px;
  border-radius: var(--radius-full);
  background: var(--neutral-300);
  cursor: pointer;
}

.theme-switch .knob {
  position: absolute;
  top: 2px;
  left: 2px;
  width: 20px;
  height: 20px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background: #FACC15;
  color: white;
  transition: transform var(--transition-slow);
}

.theme-switch.checked {
  background: var(--neutral-700);
}

.theme-switch.checked .knob {
  transform: translateX(24px);
  background: var(--neutral-800);
  color: #FDE047;
}

.menu-button {
  display: inline-flex;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-md);
  background: var(--accent-soft);
  color: var(--text-primary);
  cursor: pointer;
}

.mobile-menu {
  display: none;
  padding: var(--space-3) var(--space-3) var(--space-4);
  background-color: var(--nav-background);
}

.mobile-nav-link {
  display: block;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.mobile-nav-link:hover {
  background: var(--accent-soft);
}

.mobile-nav-link.active {
  background: var(--blue);
  color: white;
}

@media (max-width: 767px) {
  .nav-links {
    display: none;
  }

  .mobile-controls,
  .mobile-menu {
    display: flex;
  }

  .mobile-menu {
    flex-direction: column;
    gap: var(--space-2);
  }
}

/* Sections */
.page-section {
  position: relative;
  padding: var(--space-24) 0;
}

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding-top: 80px;
  overflow: hidden;
}

.hero .container {
  position: relative;
  z-index: 10;
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 800;
  line-height: 1.1;
}

.hero-role {
  margin-top: var(--space-6);
  font-size: 1.5rem;
  font-weight: 500;
}

.hero-role strong {
  color: var(--accent);
}

.hero-tagline {
  margin-top: var(--space-4);
  max-width: 42rem;
  font-size: 1.125rem;
  opacity: 0.8;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-6);
  margin-top: var(--space-10);
}

.social-row {
  display: flex;
  gap: var(--space-8);
  margin-top: var(--space-12);
}

.discover {
  display: flex;
  justify-content: center;
  margin-top: var(--space-16);
}

.discover a {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  font-size: 1.125rem;
  color: var(--accent);
}

.about-grid,
.two-columns {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-8);
  align-items: center;
}

.avatar {
  position: relative;
  width: 288px;
  height: 288px;
  margin: 0 auto;
}

.avatar-frame {
  position: relative;
  width: 100%;
  height: 100%;
  border-radius: var(--radius-full);
  overflow: hidden;
  border: 4px solid white;
}

.avatar-frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-initials {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  font-weight: 800;
  color: white;
  background: var(--indigo);
}

.about-text p {
  font-size: 1.125rem;
  margin-bottom: var(--space-6);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: var(--space-8);
}

.project-card {
  transition: transform var(--transition-slow);
}

.project-image {
  position: relative;
  height: 224px;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms;
}

.project-image h3 {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: var(--space-6);
  color: white;
  font-size: 1.25rem;
  background: linear-gradient(to top, rgba(17, 24, 39, 0.8), transparent);
}

.project-body {
  padding: var(--space-6);
}

.project-body p {
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-muted);
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.tag {
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  font-weight: 500;
  border-radius: var(--radius-full);
  background: var(--tag-background);
  color: var(--tag-text);
}

.project-links {
  display: flex;
  justify-content: space-between;
}

.project-links a,
.contact-item {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 500;
  color: var(--accent);
}

.project-links a:hover,
.contact-item:hover {
  color: var(--accent-hover);
}

.panel {
  padding: var(--space-8);
}

.panel h3 {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
  color: var(--accent);
}

.skill-bar {
  margin-bottom: var(--space-6);
}

.skill-label {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
  font-weight: 500;
}

.skill-label .percentage {
  color: var(--accent);
}

.skill-track {
  width: 100%;
  height: 12px;
  border-radius: var(--radius-full);
  overflow: hidden;
  background: var(--track);
}

.skill-fill {
  position: relative;
  height: 100%;
  overflow: hidden;
  border-radius: var(--radius-full);
  background: var(--accent);
  transition: width 1000ms ease-out;
}

.contact-intro {
  font-size: 1.125rem;
  margin-bottom: var(--space-8);
}

.contact-item {
  margin-bottom: var(--space-6);
}

.contact-item .icon-badge {
  display: inline-flex;
  padding: var(--space-2);
  margin-right: var(--space-2);
  border-radius: var(--radius-full);
  background: var(--accent-soft);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.contact-form .btn {
  width: 100%;
}

/* Footer */
.site-footer {
  padding: var(--space-10) 0;
  text-align: center;
  color: white;
  background: var(--footer-background);
}

.site-footer .copyright {
  font-size: 0.875rem;
  opacity: 0.8;
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: var(--space-6);
  margin-top: var(--space-4);
  font-size: 0.875rem;
}

.site-footer .social-row {
  justify-content: center;
  margin-top: var(--space-6);
}

/* Fallback pages */
.not-found,
.config-error {
  max-width: 640px;
  margin: 20vh auto;
  padding: var(--space-8);
  text-align: center;
}

.config-error pre {
  margin-top: var(--space-4);
  text-align: left;
  white-space: pre-wrap;
}

@media (max-width: 1023px) {
  .project-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (max-width: 767px) {
  .hero-title {
    font-size: 3rem;
  }

  .about-grid,
  .two-columns,
  .project-grid {
    grid-template-columns: minmax(0, 1fr);
  }
}
"#,
    POLISHED_STYLES
);
