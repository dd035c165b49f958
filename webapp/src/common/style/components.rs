pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.icon {
  flex-shrink: 0;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-8);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  border: none;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover {
  transform: translateY(-8px);
  text-decoration: none;
}

.btn-primary {
  background: var(--blue);
  color: white;
}

.btn-outline {
  border: 2px solid var(--accent);
  color: var(--accent);
  background: transparent;
}

.btn-outline:hover {
  background: var(--accent-soft);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow);
  overflow: hidden;
}

/* Section titles */
.section-title {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title h2 {
  font-size: 2.25rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: var(--text-primary);
}

.section-title .title-rule {
  margin: var(--space-4) auto 0;
  width: 128px;
  height: 4px;
  border-radius: var(--radius-full);
  background: var(--accent);
}

/* Round link buttons */
.social-icon {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  color: var(--accent);
  background: var(--accent-soft);
  border: 1px solid var(--border);
  transition: transform var(--transition-fast);
}

.social-icon:hover {
  transform: translateY(-8px);
  color: var(--accent-hover);
}

/* Form Elements */
.form-field label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: var(--space-2);
  color: var(--accent);
}

.form-field input,
.form-field textarea {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background: var(--input-background);
  color: var(--text-primary);
  font: inherit;
}

.form-field input:focus,
.form-field textarea:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}
"#;
