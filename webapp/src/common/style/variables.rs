pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand gradient stops */
  --blue: #2563EB;
  --indigo: #4F46E5;
  --purple: #9333EA;
  --pink: #DB2777;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;
  --neutral-950: #030712;

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;

  /* Transitions */
  --transition-fast: 300ms;
  --transition-slow: 500ms;
}

/* Theme palettes, scoped to the page root */
.portfolio.light {
  --background: var(--neutral-100);
  --surface: rgba(255, 255, 255, 0.8);
  --nav-background: rgba(255, 255, 255, 0.95);
  --border: rgba(229, 231, 235, 0.5);
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-muted: var(--neutral-600);
  --accent: var(--blue);
  --accent-hover: #1E40AF;
  --accent-soft: rgba(37, 99, 235, 0.1);
  --tag-background: #DBEAFE;
  --tag-text: #1E40AF;
  --track: var(--neutral-200);
  --input-background: #FFFFFF;
  --footer-background: #312E81;
  --shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.portfolio.dark {
  --background: var(--neutral-900);
  --surface: rgba(31, 41, 55, 0.5);
  --nav-background: rgba(31, 41, 55, 0.95);
  --border: rgba(55, 65, 81, 0.5);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-muted: var(--neutral-300);
  --accent: #C084FC;
  --accent-hover: #D8B4FE;
  --accent-soft: rgba(168, 85, 247, 0.1);
  --tag-background: rgba(88, 28, 135, 0.3);
  --tag-text: #D8B4FE;
  --track: rgba(55, 65, 81, 0.5);
  --input-background: rgba(55, 65, 81, 0.5);
  --footer-background: var(--neutral-950);
  --shadow: none;
}
"#;
