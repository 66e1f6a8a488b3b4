pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

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
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
  font-weight: 600;
  letter-spacing: 0.025em;
  cursor: pointer;
  transition: background-color var(--menu-duration) var(--easing-standard),
              transform var(--menu-duration) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--amberwood);
  color: white;
  box-shadow: var(--shadow-md);
}

.btn-primary:hover {
  background-color: var(--amberwood-hover);
}

.btn-outline {
  border: 1px solid var(--amberwood);
  color: var(--amberwood);
  background: transparent;
}

.btn-outline:hover {
  background-color: var(--amberwood-soft);
}

.btn-sm {
  padding: var(--space-2) var(--space-4);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-xl);
}

.btn-wide {
  padding: var(--space-3) var(--space-8);
  border-radius: var(--radius-xl);
}

.btn-block {
  width: 100%;
  padding: var(--space-3) 0;
}

/* Cards */
.card {
  background-color: var(--bark);
  border-radius: var(--radius-2xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
  transition: transform var(--menu-duration) var(--easing-standard),
              box-shadow var(--menu-duration) var(--easing-standard);
}

.card:hover {
  box-shadow: 0 10px 15px -3px var(--amberwood-line);
}

.hover-lift:hover {
  transform: scale(1.03);
}

.hover-grow:hover {
  transform: scale(1.05);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--amberwood);
}

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  color: var(--stone-300);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-lg);
  background-color: var(--bark-light);
  color: var(--stone-100);
}

.form-input::placeholder,
.form-textarea::placeholder {
  color: var(--stone-500);
}

.form-input:focus,
.form-textarea:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--amberwood);
}

.form-textarea {
  resize: none;
}

.form-note {
  font-size: 0.75rem;
  color: var(--stone-400);
  text-align: center;
}
"#;
